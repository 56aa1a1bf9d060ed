//! Canvas layout for the visible portion of the family forest.
//!
//! The forest is laid out top-down under a synthetic super-root that is
//! never emitted, so sibling family trees sit side by side. A node's
//! children are visible only while the node's id is in the expansion
//! mask; roots are always visible. Coordinates are abstract canvas
//! pixels; rendering them is the caller's concern.

use std::collections::HashSet;

use serde::Serialize;

use crate::member::FamilyMember;
use crate::tree::TreeNode;
use crate::types::DbId;

/// A visible member with its canvas position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedNode {
    pub member: FamilyMember,
    pub x: f64,
    pub y: f64,
    /// Displayed generation; roots are level 0.
    pub level: u32,
    /// Child count in the full forest, regardless of visibility.
    pub child_count: usize,
}

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// A visible parent-to-child connector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub parent_id: DbId,
    pub child_id: DbId,
    pub from: LayoutPoint,
    pub to: LayoutPoint,
}

/// Positioned nodes and edges plus the canvas size that contains them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasLayout {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<Edge>,
    pub width: f64,
    pub height: f64,
}

/// Layout engine with configurable spacing.
///
/// Every visible leaf is given a horizontal slot of `leaf_spacing`
/// pixels, an internal node spans its children's slots and sits centered
/// over them, and each generation drops by `level_spacing`. Sibling
/// subtrees therefore never overlap horizontally.
#[derive(Debug, Clone)]
pub struct TreeLayout {
    leaf_spacing: f64,
    level_spacing: f64,
    min_width: f64,
    min_height: f64,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            leaf_spacing: 220.0,
            level_spacing: 250.0,
            min_width: 1200.0,
            min_height: 800.0,
        }
    }
}

impl TreeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal pixels reserved per visible leaf.
    pub fn with_leaf_spacing(mut self, px: f64) -> Self {
        self.leaf_spacing = px;
        self
    }

    /// Vertical pixels between generations.
    pub fn with_level_spacing(mut self, px: f64) -> Self {
        self.level_spacing = px;
        self
    }

    /// Canvas never shrinks below this size, however small the forest.
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Lays out the forest under the given expansion mask.
    pub fn compute(&self, forest: &[TreeNode], expanded: &HashSet<DbId>) -> CanvasLayout {
        let mut layout = CanvasLayout {
            nodes: Vec::new(),
            edges: Vec::new(),
            width: self.min_width,
            height: self.min_height,
        };

        let mut cursor = 0.0;
        for root in forest {
            cursor += self.place(root, 0, cursor, expanded, None, &mut layout);
        }

        if let Some(max_level) = layout.nodes.iter().map(|n| n.level).max() {
            layout.width = self.min_width.max(cursor);
            layout.height = self
                .min_height
                .max(f64::from(max_level + 1) * self.level_spacing);
        }
        layout
    }

    /// Places `node` and its visible descendants starting at `x_left`,
    /// returning the horizontal span consumed.
    fn place(
        &self,
        node: &TreeNode,
        level: u32,
        x_left: f64,
        expanded: &HashSet<DbId>,
        parent: Option<(DbId, LayoutPoint)>,
        layout: &mut CanvasLayout,
    ) -> f64 {
        let leaves = self.visible_leaves(node, expanded);
        let span = leaves as f64 * self.leaf_spacing;
        let point = LayoutPoint {
            x: x_left + span / 2.0,
            y: f64::from(level) * self.level_spacing,
        };

        layout.nodes.push(PlacedNode {
            member: node.member.clone(),
            x: point.x,
            y: point.y,
            level,
            child_count: node.children.len(),
        });
        if let Some((parent_id, from)) = parent {
            layout.edges.push(Edge {
                parent_id,
                child_id: node.member.id,
                from,
                to: point,
            });
        }

        let mut cursor = x_left;
        for child in self.visible_children(node, expanded) {
            cursor += self.place(
                child,
                level + 1,
                cursor,
                expanded,
                Some((node.member.id, point)),
                layout,
            );
        }
        span
    }

    fn visible_children<'a>(
        &self,
        node: &'a TreeNode,
        expanded: &HashSet<DbId>,
    ) -> &'a [TreeNode] {
        if expanded.contains(&node.member.id) {
            &node.children
        } else {
            &[]
        }
    }

    fn visible_leaves(&self, node: &TreeNode, expanded: &HashSet<DbId>) -> usize {
        let children = self.visible_children(node, expanded);
        if children.is_empty() {
            1
        } else {
            children
                .iter()
                .map(|c| self.visible_leaves(c, expanded))
                .sum()
        }
    }
}
