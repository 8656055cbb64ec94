//! Hit-tree queries
//!
//! Dismissal needs two answers about host nodes: "is this event target inside
//! that subtree?" and "is this node still attached to the document?". The
//! host answers both through [`HitTree`]; the engine never walks the real
//! view tree itself.

use rustc_hash::FxHashMap;

use crate::events::NodeId;

/// Containment and connectedness queries over host view nodes
pub trait HitTree {
    /// Whether `node` is `ancestor` itself or lives inside its subtree
    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool;

    /// Whether `node` is still attached to the document
    ///
    /// A node the host has already removed must report `false`.
    fn is_connected(&self, node: NodeId) -> bool;
}

/// A [`HitTree`] backed by an explicit parent map
///
/// Hosts with retained trees usually implement [`HitTree`] directly on their
/// own structures; this map-backed variant serves simple hosts and tests.
#[derive(Debug, Default)]
pub struct ParentMapHitTree {
    parents: FxHashMap<NodeId, NodeId>,
    roots: Vec<NodeId>,
}

impl ParentMapHitTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a root node
    pub fn insert_root(&mut self, node: NodeId) {
        self.roots.push(node);
    }

    /// Attach `node` under `parent`
    pub fn insert(&mut self, node: NodeId, parent: NodeId) {
        self.parents.insert(node, parent);
    }

    /// Detach a node (its descendants become disconnected too)
    pub fn remove(&mut self, node: NodeId) {
        self.parents.remove(&node);
        self.roots.retain(|&r| r != node);
    }
}

impl HitTree for ParentMapHitTree {
    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == ancestor {
                return true;
            }
            match self.parents.get(&current) {
                Some(&parent) => current = parent,
                None => return false,
            }
        }
    }

    fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if self.roots.contains(&current) {
                return true;
            }
            match self.parents.get(&current) {
                Some(&parent) => current = parent,
                None => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ParentMapHitTree {
        // 1 (root) -> 2 -> 3, 1 -> 4
        let mut tree = ParentMapHitTree::new();
        tree.insert_root(1);
        tree.insert(2, 1);
        tree.insert(3, 2);
        tree.insert(4, 1);
        tree
    }

    #[test]
    fn test_descendant() {
        let tree = sample_tree();
        assert!(tree.is_descendant(3, 1));
        assert!(tree.is_descendant(3, 2));
        assert!(tree.is_descendant(2, 2));
        assert!(!tree.is_descendant(4, 2));
        assert!(!tree.is_descendant(1, 3));
    }

    #[test]
    fn test_connected() {
        let mut tree = sample_tree();
        assert!(tree.is_connected(3));
        tree.remove(2);
        assert!(!tree.is_connected(3));
        assert!(tree.is_connected(4));
    }

    #[test]
    fn test_unknown_node_is_disconnected() {
        let tree = sample_tree();
        assert!(!tree.is_connected(99));
        assert!(!tree.is_descendant(99, 1));
    }
}
