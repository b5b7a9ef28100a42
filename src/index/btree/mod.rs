//! B+-tree ordered index.
//!
//! A height-balanced tree of fixed maximum fan-out `order`, mapping a unique
//! ordered key to an opaque payload.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    BPlusTree<K, V>                      │
//! │  ┌───────────────────────────────────────────────────┐ │
//! │  │          nodes: Vec<Node<K, V>>  (arena)          │ │
//! │  │                                                   │ │
//! │  │              [ Internal  k₁ k₂ ]  ◀── root        │ │
//! │  │              ╱       │        ╲                   │ │
//! │  │   [Leaf a b] ──▶ [Leaf c d] ──▶ [Leaf e f] ──▶ ∅  │ │
//! │  │              (leaf chain: ordered full scans)     │ │
//! │  └───────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//! - Keys are strictly ascending within every node and unique tree-wide.
//! - All leaves sit at the same depth.
//! - A leaf holds at most `order - 1` entries and (root aside) at least
//!   `ceil(order / 2) - 1`; an internal node holds 1 to `order - 1`
//!   separators.
//! - Following leaf `next` links from the leftmost leaf visits every key in
//!   ascending order exactly once.
//!
//! # Operations
//! Point lookup ([`BPlusTree::search`]), ordered insertion with automatic
//! splitting ([`BPlusTree::insert`], upsert semantics), and lazy ascending
//! traversal over the leaf chain ([`BPlusTree::scan_from`],
//! [`BPlusTree::iter`]). Deletion and persistence are out of scope: the
//! structure is transient and rebuilt from the caller's records on startup.

mod iter;
mod node;

pub use iter::ScanFrom;

use tracing::{debug, trace};

use crate::common::config::{DEFAULT_ORDER, MIN_ORDER};
use crate::common::{Error, Result};
use node::{Node, NodeId};

/// An in-memory B+-tree: ordered index from `K` to an opaque payload `V`.
///
/// The only fallible operation is construction: [`BPlusTree::new`] rejects
/// an order below [`MIN_ORDER`]. Everything else is total — absence of a key
/// is `None` or an empty scan, never an error, and every insert fully
/// completes (including all upward split propagation) before returning.
///
/// Keys need `Clone` because a leaf split *copies* the new right leaf's
/// first key up as a separator; payloads are never cloned.
///
/// # Usage
/// ```
/// use campusdb::index::BPlusTree;
///
/// let mut tree = BPlusTree::new(4)?;
/// tree.insert(10, "ten");
/// tree.insert(5, "five");
/// tree.insert(10, "TEN"); // upsert: replaces, never duplicates
///
/// assert_eq!(tree.search(&10), Some(&"TEN"));
/// assert_eq!(tree.len(), 2);
///
/// let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![5, 10]);
/// # Ok::<(), campusdb::common::Error>(())
/// ```
pub struct BPlusTree<K, V> {
    /// Node arena. Nodes are only ever added (splits, root growth), so a
    /// `NodeId` stays valid for the life of the tree.
    nodes: Vec<Node<K, V>>,

    /// Handle of the root node. Starts as a single empty leaf.
    root: NodeId,

    /// Maximum number of children per internal node. Equivalently, nodes
    /// hold at most `order - 1` entries or separators.
    order: usize,

    /// Number of distinct keys stored.
    len: usize,

    /// Levels from root to leaf inclusive (1 while the root is a leaf).
    height: usize,
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Create an empty tree with the given order.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if `order` is below [`MIN_ORDER`] —
    /// the one failure the index can produce, surfaced before any data is
    /// stored.
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidConfiguration(order));
        }
        Ok(Self::with_order(order))
    }

    /// Construct without validation. Callers guarantee `order >= MIN_ORDER`.
    fn with_order(order: usize) -> Self {
        Self {
            nodes: vec![Node::empty_leaf()],
            root: NodeId(0),
            order,
            len: 0,
            height: 1,
        }
    }

    // ========================================================================
    // Observability
    // ========================================================================

    /// The tree's order (maximum children per internal node).
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Levels from root to leaf inclusive. 1 while the root is still a leaf;
    /// grows by one each time the root splits.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Point lookup. Returns the payload stored under `key`, if any.
    ///
    /// Descends one node per level, binary-searching separators on the way
    /// down and the leaf's keys at the bottom. No side effects.
    pub fn search(&self, key: &K) -> Option<&V> {
        let leaf = self.find_leaf(key);
        match &self.nodes[leaf.0] {
            Node::Leaf { keys, values, .. } => {
                keys.binary_search(key).ok().map(|pos| &values[pos])
            }
            Node::Internal { .. } => unreachable!("descent always ends at a leaf"),
        }
    }

    /// Descend from the root to the leaf whose key range covers `key`.
    fn find_leaf(&self, key: &K) -> NodeId {
        let mut current = self.root;
        loop {
            match &self.nodes[current.0] {
                Node::Internal { keys, children } => {
                    // Child index = first separator strictly greater than
                    // `key`; keys equal to a separator live to its right.
                    let idx = keys.partition_point(|sep| sep <= key);
                    current = children[idx];
                }
                Node::Leaf { .. } => return current,
            }
        }
    }

    // ========================================================================
    // Ordered scans
    // ========================================================================

    /// Lazy ascending scan beginning at the leaf whose key range covers
    /// `key` (the first leaf when `key` is below all stored keys).
    ///
    /// The cursor starts at that leaf's first entry and follows the forward
    /// chain across leaves, so entries of the covering leaf that sort below
    /// `key` are included. Each call produces a fresh cursor; the tree is
    /// not mutated.
    pub fn scan_from(&self, key: &K) -> ScanFrom<'_, K, V> {
        ScanFrom::new(self, self.find_leaf(key))
    }

    /// Lazy ascending scan over every entry, starting at the leftmost leaf.
    pub fn iter(&self) -> ScanFrom<'_, K, V> {
        let mut current = self.root;
        loop {
            match &self.nodes[current.0] {
                Node::Internal { children, .. } => current = children[0],
                Node::Leaf { .. } => return ScanFrom::new(self, current),
            }
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `value` under `key`, replacing any existing payload (upsert).
    ///
    /// A leaf that overflows splits at `ceil(order / 2)` and copies the new
    /// right leaf's first key up as a separator; an internal node that
    /// overflows moves its middle separator up instead. Splits propagate
    /// until a node fits, or the root itself splits and the tree grows a
    /// level. The mutation fully completes before this returns — there is
    /// no observable intermediate state.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some((separator, right)) = self.insert_into(self.root, key, value) {
            // Root split: a new internal root holds the promoted separator
            // and the two halves as children.
            let old_root = self.root;
            self.root = self.push_node(Node::Internal {
                keys: vec![separator],
                children: vec![old_root, right],
            });
            self.height += 1;
            debug!(height = self.height, len = self.len, "root split; tree grew a level");
        }
    }

    /// Recursive insertion. Returns `Some((separator, right))` when the node
    /// at `id` split and the caller must absorb the promoted separator.
    fn insert_into(&mut self, id: NodeId, key: K, value: V) -> Option<(K, NodeId)> {
        if let Node::Internal { keys, children } = &self.nodes[id.0] {
            let idx = keys.partition_point(|sep| *sep <= key);
            let child = children[idx];
            let (separator, right) = self.insert_into(child, key, value)?;
            return self.insert_separator(id, separator, right);
        }
        self.insert_into_leaf(id, key, value)
    }

    /// Insert into the target leaf, splitting on overflow.
    fn insert_into_leaf(&mut self, id: NodeId, key: K, value: V) -> Option<(K, NodeId)> {
        let max_entries = self.order - 1;
        let split = match &mut self.nodes[id.0] {
            Node::Leaf { keys, values, next } => {
                match keys.binary_search(&key) {
                    // Upsert: replace in place, key count unchanged.
                    Ok(pos) => {
                        values[pos] = value;
                        return None;
                    }
                    Err(pos) => {
                        keys.insert(pos, key);
                        values.insert(pos, value);
                    }
                }
                if keys.len() <= max_entries {
                    None
                } else {
                    // Overflow: move the upper half into a new leaf that
                    // takes over this leaf's downstream chain. The promoted
                    // separator is *copied* up — it stays present as the
                    // new leaf's first key.
                    let mid = keys.len().div_ceil(2);
                    let right_keys = keys.split_off(mid);
                    let right_values = values.split_off(mid);
                    let separator = right_keys[0].clone();
                    Some((separator, right_keys, right_values, next.take()))
                }
            }
            Node::Internal { .. } => unreachable!("insert descent always ends at a leaf"),
        };
        self.len += 1;

        let (separator, right_keys, right_values, old_next) = split?;
        let right = self.push_node(Node::Leaf {
            keys: right_keys,
            values: right_values,
            next: old_next,
        });
        if let Node::Leaf { next, .. } = &mut self.nodes[id.0] {
            *next = Some(right);
        }
        trace!(len = self.len, "leaf split");
        Some((separator, right))
    }

    /// Absorb a separator promoted by a child split, splitting this internal
    /// node in turn if it overflows.
    fn insert_separator(&mut self, id: NodeId, separator: K, right: NodeId) -> Option<(K, NodeId)> {
        let max_keys = self.order - 1;
        let split = match &mut self.nodes[id.0] {
            Node::Internal { keys, children } => {
                let pos = keys.partition_point(|k| *k < separator);
                keys.insert(pos, separator);
                children.insert(pos + 1, right);
                if keys.len() <= max_keys {
                    None
                } else {
                    // Overflow: unlike the leaf case, the middle separator
                    // *moves* up — removed from both halves, it exists only
                    // in the parent afterwards.
                    let mid = keys.len() / 2;
                    let right_keys = keys.split_off(mid + 1);
                    let promoted = keys.remove(mid);
                    let right_children = children.split_off(mid + 1);
                    Some((promoted, right_keys, right_children))
                }
            }
            Node::Leaf { .. } => unreachable!("separators are only promoted into internal nodes"),
        };

        let (promoted, right_keys, right_children) = split?;
        let new_right = self.push_node(Node::Internal {
            keys: right_keys,
            children: right_children,
        });
        trace!("internal node split");
        Some((promoted, new_right))
    }

    /// Append a node to the arena and return its handle.
    fn push_node(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<K: Ord + Clone, V> Default for BPlusTree<K, V> {
    /// An empty tree with [`DEFAULT_ORDER`].
    fn default() -> Self {
        Self::with_order(DEFAULT_ORDER)
    }
}

impl<'a, K: Ord + Clone, V> IntoIterator for &'a BPlusTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ScanFrom<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;
    use std::fmt::Debug;

    /// Walk the whole tree and assert every structural invariant:
    /// in-node ordering, separator ranges, fill bounds, uniform leaf depth,
    /// and leaf-chain completeness.
    fn check_invariants<K: Ord + Clone + Debug, V>(tree: &BPlusTree<K, V>) {
        let mut leaf_depths = Vec::new();
        let mut leaves_in_order = Vec::new();
        let key_count = check_node(
            tree,
            tree.root,
            0,
            None,
            None,
            tree.root,
            &mut leaf_depths,
            &mut leaves_in_order,
        );
        assert_eq!(key_count, tree.len(), "len out of sync with stored keys");

        // Balance: every leaf at the same depth, matching the tracked height.
        assert!(!leaf_depths.is_empty());
        assert!(
            leaf_depths.iter().all(|d| *d == leaf_depths[0]),
            "leaves at unequal depths: {:?}",
            leaf_depths
        );
        assert_eq!(leaf_depths[0] + 1, tree.height(), "height out of sync");

        // Leaf chain: following `next` from the leftmost leaf must visit the
        // in-order leaves exactly, with strictly ascending keys throughout.
        let mut chain = Vec::new();
        let mut chained_keys: Vec<&K> = Vec::new();
        let mut current = Some(leaves_in_order[0]);
        while let Some(id) = current {
            chain.push(id);
            match &tree.nodes[id.0] {
                Node::Leaf { keys, next, .. } => {
                    chained_keys.extend(keys.iter());
                    current = *next;
                }
                Node::Internal { .. } => panic!("leaf chain reached an internal node"),
            }
        }
        assert_eq!(chain, leaves_in_order, "leaf chain disagrees with tree order");
        assert!(
            chained_keys.windows(2).all(|w| w[0] < w[1]),
            "leaf chain keys not strictly ascending"
        );
        assert_eq!(chained_keys.len(), tree.len());
    }

    /// Recursive half of [`check_invariants`]. `lower` is an inclusive bound,
    /// `upper` exclusive. Returns the subtree's key count.
    #[allow(clippy::too_many_arguments)]
    fn check_node<'t, K: Ord + Clone + Debug, V>(
        tree: &'t BPlusTree<K, V>,
        id: NodeId,
        depth: usize,
        lower: Option<&'t K>,
        upper: Option<&'t K>,
        root: NodeId,
        leaf_depths: &mut Vec<usize>,
        leaves: &mut Vec<NodeId>,
    ) -> usize {
        match &tree.nodes[id.0] {
            Node::Leaf { keys, values, .. } => {
                assert_eq!(keys.len(), values.len());
                assert!(keys.windows(2).all(|w| w[0] < w[1]), "leaf keys unsorted");
                for key in keys {
                    assert!(lower.is_none_or(|b| key >= b), "leaf key below range");
                    assert!(upper.is_none_or(|b| key < b), "leaf key above range");
                }
                if id != root {
                    let min_fill = tree.order().div_ceil(2) - 1;
                    assert!(keys.len() >= min_fill, "leaf underfull: {}", keys.len());
                }
                assert!(keys.len() <= tree.order() - 1, "leaf overfull");
                leaf_depths.push(depth);
                leaves.push(id);
                keys.len()
            }
            Node::Internal { keys, children } => {
                assert!(!keys.is_empty(), "internal node without separators");
                assert!(keys.len() <= tree.order() - 1, "internal node overfull");
                assert_eq!(children.len(), keys.len() + 1);
                assert!(keys.windows(2).all(|w| w[0] < w[1]), "separators unsorted");

                let mut count = 0;
                for (i, child) in children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(&keys[i - 1]) };
                    let child_upper = if i == keys.len() { upper } else { Some(&keys[i]) };
                    count += check_node(
                        tree,
                        *child,
                        depth + 1,
                        child_lower,
                        child_upper,
                        root,
                        leaf_depths,
                        leaves,
                    );
                }
                count
            }
        }
    }

    fn keys_of<K: Ord + Copy, V>(tree: &BPlusTree<K, V>) -> Vec<K> {
        tree.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_order_below_minimum_rejected() {
        for order in 0..MIN_ORDER {
            let result = BPlusTree::<u32, ()>::new(order);
            assert_eq!(result.err(), Some(Error::InvalidConfiguration(order)));
        }
        assert!(BPlusTree::<u32, ()>::new(MIN_ORDER).is_ok());
    }

    #[test]
    fn test_empty_tree() {
        let tree: BPlusTree<u32, &str> = BPlusTree::new(4).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.search(&1), None);
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree.scan_from(&1).count(), 0);
        check_invariants(&tree);
    }

    #[test]
    fn test_insert_and_search() {
        let mut tree = BPlusTree::new(4).unwrap();
        for k in [10u32, 20, 5, 15, 25, 30] {
            tree.insert(k, k * 10);
        }
        for k in [10u32, 20, 5, 15, 25, 30] {
            assert_eq!(tree.search(&k), Some(&(k * 10)));
        }
        assert_eq!(tree.search(&99), None);
        assert_eq!(tree.search(&0), None);
        check_invariants(&tree);
    }

    #[test]
    fn test_upsert_replaces_payload() {
        let mut tree = BPlusTree::new(4).unwrap();
        tree.insert(7, "old");
        tree.insert(7, "new");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.search(&7), Some(&"new"));

        // Upsert of a key in a deep tree: size and shape untouched.
        for k in 0..50 {
            tree.insert(k, "x");
        }
        let height = tree.height();
        tree.insert(23, "y");
        assert_eq!(tree.len(), 50);
        assert_eq!(tree.height(), height);
        assert_eq!(tree.search(&23), Some(&"y"));
        check_invariants(&tree);
    }

    #[test]
    fn test_root_leaf_split_shape() {
        // Order 4: leaf capacity 3, so the 4th insert forces the first
        // split and grows a new internal root with one separator.
        let mut tree = BPlusTree::new(4).unwrap();
        for k in [1u32, 2, 3] {
            tree.insert(k, ());
        }
        assert_eq!(tree.height(), 1);

        tree.insert(4, ());
        assert_eq!(tree.height(), 2);
        match &tree.nodes[tree.root.0] {
            Node::Internal { keys, children } => {
                assert_eq!(keys, &vec![3]); // copy-up: first key of the right leaf
                assert_eq!(children.len(), 2);
                for (child, expected) in children.iter().zip([vec![1, 2], vec![3, 4]]) {
                    match &tree.nodes[child.0] {
                        Node::Leaf { keys, .. } => assert_eq!(keys, &expected),
                        Node::Internal { .. } => panic!("expected leaf children"),
                    }
                }
            }
            Node::Leaf { .. } => panic!("root should be internal after the split"),
        }
        check_invariants(&tree);
    }

    #[test]
    fn test_scenario_order_four() {
        let mut tree = BPlusTree::new(4).unwrap();
        for k in [10u32, 20, 5, 15, 25, 30] {
            tree.insert(k, format!("payload-{k}"));
        }
        assert_eq!(tree.search(&15), Some(&"payload-15".to_string()));
        assert_eq!(tree.search(&99), None);

        let scanned: Vec<u32> = tree.scan_from(&10).map(|(k, _)| *k).collect();
        assert_eq!(scanned, vec![5, 10, 15, 20, 25, 30]);
        check_invariants(&tree);
    }

    #[test]
    fn test_scan_from_positions() {
        let mut tree = BPlusTree::new(4).unwrap();
        for k in [10u32, 20, 5, 15, 25, 30] {
            tree.insert(k, ());
        }
        // Tree shape here: leaves [5,10] -> [15,20] -> [25,30].
        // Below all keys: the whole sequence.
        assert_eq!(keys_from_scan(&tree, 1), vec![5, 10, 15, 20, 25, 30]);
        // Covering leaf granularity: 15 starts at its own leaf.
        assert_eq!(keys_from_scan(&tree, 15), vec![15, 20, 25, 30]);
        // Absent key inside a leaf's range starts at that leaf.
        assert_eq!(keys_from_scan(&tree, 17), vec![15, 20, 25, 30]);
        // Above all keys: the last leaf still gets scanned out.
        assert_eq!(keys_from_scan(&tree, 99), vec![25, 30]);

        // Restartable: a second scan sees the same sequence.
        assert_eq!(keys_from_scan(&tree, 1), keys_from_scan(&tree, 1));
    }

    fn keys_from_scan(tree: &BPlusTree<u32, ()>, from: u32) -> Vec<u32> {
        tree.scan_from(&from).map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_ascending_inserts_deep_propagation() {
        // Order 3 maximizes split frequency: 200 ascending keys force
        // repeated multi-level propagation and several root splits.
        let mut tree = BPlusTree::new(3).unwrap();
        for k in 0u32..200 {
            tree.insert(k, k);
        }
        assert_eq!(tree.len(), 200);
        assert!(tree.height() > 3);
        assert_eq!(keys_of(&tree), (0..200).collect::<Vec<_>>());
        for k in 0u32..200 {
            assert_eq!(tree.search(&k), Some(&k));
        }
        check_invariants(&tree);
    }

    #[test]
    fn test_descending_inserts() {
        let mut tree = BPlusTree::new(4).unwrap();
        for k in (0u32..100).rev() {
            tree.insert(k, k);
        }
        assert_eq!(keys_of(&tree), (0..100).collect::<Vec<_>>());
        check_invariants(&tree);
    }

    #[test]
    fn test_interleaved_inserts() {
        // Alternate low/high so splits land in the middle of the key space.
        let mut tree = BPlusTree::new(5).unwrap();
        for i in 0u32..64 {
            tree.insert(i, i);
            tree.insert(1000 - i, 1000 - i);
        }
        assert_eq!(tree.len(), 128);
        check_invariants(&tree);
    }

    proptest! {
        /// For any order and insert sequence, the tree matches a BTreeMap
        /// model and all structural invariants hold.
        #[test]
        fn prop_matches_model_and_invariants(
            order in MIN_ORDER..8usize,
            ops in prop::collection::vec((0u16..400, any::<u16>()), 0..300),
        ) {
            let mut tree = BPlusTree::new(order).unwrap();
            let mut model = BTreeMap::new();
            for (k, v) in ops {
                tree.insert(k, v);
                model.insert(k, v);
            }

            check_invariants(&tree);
            prop_assert_eq!(tree.len(), model.len());

            // Ordered scan equals the model's ordered view.
            let scanned: Vec<(u16, u16)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
            let expected: Vec<(u16, u16)> = model.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(scanned, expected);

            // Point lookups agree, present and absent keys alike.
            for k in 0u16..400 {
                prop_assert_eq!(tree.search(&k), model.get(&k));
            }
        }
    }
}
