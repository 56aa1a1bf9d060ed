//! Forest reconstruction from flat member lists.
//!
//! The database stores members as rows with an optional `parent_id`;
//! nothing guarantees the references form a well-shaped tree. This
//! module rebuilds the forest tolerantly: dangling or self-referencing
//! parents make a member a root, and members trapped in reference
//! cycles are recovered by promoting the lowest id in the cycle.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::member::FamilyMember;
use crate::types::DbId;

/// A member together with its children, ordered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub member: FamilyMember,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of members in this subtree, including this node.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Orders siblings by position, then name, then id.
fn sibling_order(a: &FamilyMember, b: &FamilyMember) -> Ordering {
    a.position
        .cmp(&b.position)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rebuilds the display forest from a flat member list.
///
/// Every input member appears in the output exactly once. A member is a
/// root when it has no parent, references itself, or references an id
/// not present in the input. Siblings and roots are ordered by
/// `(position, name)`.
pub fn build_forest(members: Vec<FamilyMember>) -> Vec<TreeNode> {
    let ids: HashSet<DbId> = members.iter().map(|m| m.id).collect();

    // Bucket ids by parent, carrying the sibling sort key alongside.
    let mut roots: Vec<(i32, String, DbId)> = Vec::new();
    let mut buckets: HashMap<DbId, Vec<(i32, String, DbId)>> = HashMap::new();
    for m in &members {
        let key = (m.position, m.name.clone(), m.id);
        match m.parent_id {
            Some(parent) if parent != m.id && ids.contains(&parent) => {
                buckets.entry(parent).or_default().push(key);
            }
            _ => roots.push(key),
        }
    }
    roots.sort();

    let mut child_order: HashMap<DbId, Vec<DbId>> = HashMap::with_capacity(buckets.len());
    for (parent, mut bucket) in buckets {
        bucket.sort();
        child_order.insert(parent, bucket.into_iter().map(|(_, _, id)| id).collect());
    }

    let mut remaining: HashMap<DbId, FamilyMember> =
        members.into_iter().map(|m| (m.id, m)).collect();

    let mut forest: Vec<TreeNode> = roots
        .into_iter()
        .filter_map(|(_, _, id)| attach(id, &mut remaining, &child_order))
        .collect();

    // Anything still unplaced sits in a reference cycle. Promote the
    // lowest remaining id to a root until every member is placed.
    while let Some(&next) = remaining.keys().min() {
        if let Some(node) = attach(next, &mut remaining, &child_order) {
            forest.push(node);
        }
    }

    forest.sort_by(|a, b| sibling_order(&a.member, &b.member));
    forest
}

/// Takes `id` out of `remaining` and attaches its subtree. A child that
/// was already placed closes a cycle and is skipped.
fn attach(
    id: DbId,
    remaining: &mut HashMap<DbId, FamilyMember>,
    child_order: &HashMap<DbId, Vec<DbId>>,
) -> Option<TreeNode> {
    let member = remaining.remove(&id)?;
    let mut children = Vec::new();
    if let Some(order) = child_order.get(&id) {
        for &child in order {
            if let Some(node) = attach(child, remaining, child_order) {
                children.push(node);
            }
        }
    }
    Some(TreeNode { member, children })
}
