//! Index structures.
//!
//! The one structure that does real invariant work in CampusDB: a
//! [`btree::BPlusTree`] keyed by student id. Course and faculty registries
//! are plain key-unique maps and live in [`crate::records`] instead.

pub mod btree;

pub use btree::{BPlusTree, ScanFrom};
