//! Configuration constants for CampusDB.

/// Smallest usable B+-tree order.
///
/// An order below 3 cannot split meaningfully: with `order - 1` entries per
/// node, order 2 would leave one half of every split empty. Construction
/// with a smaller order fails with
/// [`Error::InvalidConfiguration`](crate::common::Error::InvalidConfiguration).
pub const MIN_ORDER: usize = 3;

/// Default B+-tree order for the student index.
///
/// Order 4 means at most 4 children per internal node and at most 3 entries
/// per leaf. Deliberately small: the index is in-memory and rebuilt on every
/// process start, and a small fan-out keeps splits frequent enough to
/// exercise the full propagation machinery under test.
pub const DEFAULT_ORDER: usize = 4;
