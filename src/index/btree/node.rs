//! B+-tree node storage.
//!
//! Nodes live in a flat arena owned by the tree and refer to one another by
//! [`NodeId`] handle. Parent-to-child handles form a strict ownership tree
//! rooted at the tree's root; the leaf `next` handle is a non-owning
//! cross-link that threads every leaf into one ascending chain.

/// Handle to a node in the tree's arena.
///
/// Deletion is out of scope, so nodes are never removed and a handle stays
/// valid for the lifetime of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) usize);

/// The tree's storage unit: a tagged leaf/internal variant.
///
/// Keeping the two shapes as enum variants (instead of one struct with an
/// `is_leaf` flag consulted at every access site) lets each operation state
/// which shape it expects and have the compiler check it.
#[derive(Debug)]
pub(crate) enum Node<K, V> {
    /// Ordered `(key, payload)` entries plus the forward chain link.
    ///
    /// Holds at most `order - 1` entries and, once the tree has more than
    /// one node, at least `ceil(order / 2) - 1`. A root leaf may hold fewer.
    Leaf {
        keys: Vec<K>,
        values: Vec<V>,
        /// Next leaf in ascending key order, or `None` for the last leaf.
        next: Option<NodeId>,
    },

    /// `n` separator keys together with `n + 1` children.
    ///
    /// Child `i` holds keys strictly below separator `i`; the last child
    /// holds keys at or above the last separator.
    Internal {
        keys: Vec<K>,
        children: Vec<NodeId>,
    },
}

impl<K, V> Node<K, V> {
    /// An empty, unchained leaf — the state of a freshly constructed root.
    pub(crate) fn empty_leaf() -> Self {
        Node::Leaf {
            keys: Vec::new(),
            values: Vec::new(),
            next: None,
        }
    }
}
