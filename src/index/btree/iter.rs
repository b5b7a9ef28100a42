//! Ordered iteration over the leaf chain.

use super::node::{Node, NodeId};
use super::BPlusTree;

/// Lazy ascending iterator over `(key, payload)` entries.
///
/// Produced by [`BPlusTree::scan_from`] and [`BPlusTree::iter`]. Walks the
/// leaf chain without re-descending the tree, so a full scan costs one
/// descent plus one hop per leaf. Each call to those methods produces a
/// fresh, independent cursor; iteration never mutates the tree.
pub struct ScanFrom<'a, K, V> {
    tree: &'a BPlusTree<K, V>,
    /// Leaf the cursor currently points at; `None` once the chain ends.
    leaf: Option<NodeId>,
    /// Next entry to yield within the current leaf.
    pos: usize,
}

impl<'a, K, V> ScanFrom<'a, K, V> {
    pub(crate) fn new(tree: &'a BPlusTree<K, V>, leaf: NodeId) -> Self {
        Self {
            tree,
            leaf: Some(leaf),
            pos: 0,
        }
    }
}

impl<'a, K, V> Iterator for ScanFrom<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.leaf?;
            match &self.tree.nodes[leaf.0] {
                Node::Leaf { keys, values, next } => {
                    if self.pos < keys.len() {
                        let pos = self.pos;
                        self.pos += 1;
                        return Some((&keys[pos], &values[pos]));
                    }
                    // Current leaf exhausted; hop across the chain.
                    self.leaf = *next;
                    self.pos = 0;
                }
                Node::Internal { .. } => unreachable!("scan cursors only reference leaves"),
            }
        }
    }
}

impl<K, V> std::iter::FusedIterator for ScanFrom<'_, K, V> {}
