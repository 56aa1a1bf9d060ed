//! Interaction state for the tree view.
//!
//! Selection, the expansion set, and the drag-to-reorder gesture are
//! modeled as a reducer: [`SessionState::apply`] consumes one
//! [`Gesture`] and returns the [`Effect`]s the runtime must perform.
//! Transitions are pure; all I/O (swap requests, cache writes) happens
//! outside.

use std::collections::HashSet;

use kintree_core::DbId;

// ---------------------------------------------------------------------------
// Gestures and effects
// ---------------------------------------------------------------------------

/// A user gesture against the tree view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Click on a node: make it the focal member.
    Select(DbId),
    /// Click on empty canvas.
    ClearSelection,
    /// Toggle whether a node's children are rendered.
    ToggleExpanded(DbId),
    /// Begin dragging a node to reorder it.
    DragStart(DbId),
    /// Hover over a candidate drop target while dragging.
    DragHover(DbId),
    /// Leave the current hover target while dragging.
    DragLeave,
    /// Release the drag over a target node.
    Drop(DbId),
    /// Abort the drag (escape key, pointer left the canvas).
    DragCancel,
}

/// Side effects the runtime performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue `swap(source, target)` against the service.
    RequestSwap { source: DbId, target: DbId },
    /// Recompute the layout: the visibility mask changed.
    Relayout,
    /// Persist the expansion set to the cache.
    WriteCache,
    /// Scroll the viewport to this member's post-relayout position.
    Recenter(DbId),
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// In-progress drag-to-reorder gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Member the drag started on.
    pub source: DbId,
    /// Node currently highlighted as the drop candidate.
    pub hover_target: Option<DbId>,
}

/// Interaction state owned by the tree view.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub selection: Option<DbId>,
    pub expanded: HashSet<DbId>,
    pub drag: Option<DragState>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from a previously cached expansion set.
    pub fn with_expanded(expanded: HashSet<DbId>) -> Self {
        Self {
            expanded,
            ..Self::default()
        }
    }

    /// Apply one gesture and return the effects to perform, in order.
    pub fn apply(&mut self, gesture: Gesture) -> Vec<Effect> {
        match gesture {
            Gesture::Select(id) => {
                self.selection = Some(id);
                Vec::new()
            }
            Gesture::ClearSelection => {
                self.selection = None;
                Vec::new()
            }
            Gesture::ToggleExpanded(id) => {
                let mut effects = vec![Effect::Relayout, Effect::WriteCache];
                if self.expanded.remove(&id) {
                    // Collapsed. Keep the focal node in view: its
                    // position moves once its subtree disappears.
                    if self.selection == Some(id) {
                        effects.push(Effect::Recenter(id));
                    }
                } else {
                    self.expanded.insert(id);
                }
                effects
            }
            Gesture::DragStart(id) => {
                self.drag = Some(DragState {
                    source: id,
                    hover_target: None,
                });
                Vec::new()
            }
            Gesture::DragHover(id) => {
                if let Some(drag) = self.drag.as_mut() {
                    // The source node is not a drop candidate.
                    drag.hover_target = (id != drag.source).then_some(id);
                }
                Vec::new()
            }
            Gesture::DragLeave => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.hover_target = None;
                }
                Vec::new()
            }
            Gesture::Drop(target) => {
                let Some(drag) = self.drag.take() else {
                    return Vec::new();
                };
                if target == drag.source {
                    return Vec::new();
                }
                vec![Effect::RequestSwap {
                    source: drag.source,
                    target,
                }]
            }
            Gesture::DragCancel => {
                self.drag = None;
                Vec::new()
            }
        }
    }

    /// Drop every reference to a member that no longer exists. Called
    /// after a delete succeeds.
    pub fn forget_member(&mut self, id: DbId) -> Vec<Effect> {
        if self.selection == Some(id) {
            self.selection = None;
        }
        let drag_involves_id = self
            .drag
            .is_some_and(|d| d.source == id || d.hover_target == Some(id));
        if drag_involves_id {
            self.drag = None;
        }

        // The member list changed, so the layout is stale regardless of
        // whether the expansion set shrank.
        if self.expanded.remove(&id) {
            vec![Effect::Relayout, Effect::WriteCache]
        } else {
            vec![Effect::Relayout]
        }
    }

    pub fn is_expanded(&self, id: DbId) -> bool {
        self.expanded.contains(&id)
    }
}
