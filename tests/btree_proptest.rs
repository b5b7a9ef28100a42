//! Property-based tests: the index must agree with `BTreeMap` as a model
//! for any insert sequence, through the public API alone.

use std::collections::BTreeMap;

use campusdb::index::BPlusTree;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_search_matches_model(
        order in 3usize..10,
        ops in prop::collection::vec((0u32..1000, any::<u32>()), 0..500),
    ) {
        let mut tree = BPlusTree::new(order).unwrap();
        let mut model = BTreeMap::new();
        for &(key, value) in &ops {
            tree.insert(key, value);
            model.insert(key, value);
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.is_empty(), model.is_empty());

        for &(key, _) in &ops {
            prop_assert_eq!(tree.search(&key), model.get(&key));
        }
        // Keys never inserted are absent.
        for key in 1000u32..1010 {
            prop_assert_eq!(tree.search(&key), None);
        }
    }

    #[test]
    fn prop_full_scan_is_sorted_and_complete(
        order in 3usize..10,
        keys in prop::collection::btree_set(0u32..10_000, 0..400),
    ) {
        let mut tree = BPlusTree::new(order).unwrap();
        // Insert in a shuffled-ish order (reversed) to exercise splits at
        // both ends of the key space.
        for &key in keys.iter().rev() {
            tree.insert(key, key);
        }

        let scanned: Vec<u32> = tree.iter().map(|(k, _)| *k).collect();
        let expected: Vec<u32> = keys.into_iter().collect();
        prop_assert_eq!(scanned, expected);
    }

    #[test]
    fn prop_upsert_never_grows_len(
        order in 3usize..10,
        keys in prop::collection::vec(0u32..50, 1..200),
    ) {
        // A small key range forces plenty of repeats.
        let mut tree = BPlusTree::new(order).unwrap();
        let mut model = BTreeMap::new();
        for (round, &key) in keys.iter().enumerate() {
            tree.insert(key, round);
            model.insert(key, round);
            prop_assert_eq!(tree.len(), model.len());
        }
        for (key, round) in &model {
            prop_assert_eq!(tree.search(key), Some(round));
        }
    }
}
