//! Property-based tests for collections using proptest.

use kitbag_collection::{arr, Collection, Key};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Push(i64),
    Insert(String, i64),
    RemoveIndex(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i64>().prop_map(Op::Push),
        ("[a-z]{1,6}", any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0usize..20).prop_map(Op::RemoveIndex),
    ]
}

fn apply(ops: &[Op]) -> Collection<i64> {
    let mut c = Collection::new();
    for op in ops {
        match op {
            Op::Push(v) => {
                c.push(*v);
            }
            Op::Insert(k, v) => {
                c.insert(k.as_str(), *v);
            }
            Op::RemoveIndex(i) => {
                c.remove(*i);
            }
        }
    }
    c
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A pushed value always lands under an index no other entry uses.
    #[test]
    fn push_never_overwrites(ops in prop::collection::vec(op_strategy(), 0..50), value in any::<i64>()) {
        let mut c = apply(&ops);
        let before = c.len();
        let key = c.push(value);
        prop_assert_eq!(c.len(), before + 1);
        prop_assert_eq!(c.get(key), Some(&value));
    }

    /// Pushed values keep their relative order.
    #[test]
    fn push_preserves_order(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let c = Collection::from_values(values.clone());
        prop_assert!(c.is_list());
        prop_assert_eq!(c.to_vec(), values);
    }

    /// Filtering never grows a collection and keeps only matching values.
    #[test]
    fn filter_never_grows(values in prop::collection::vec(any::<i64>(), 0..50), threshold in any::<i64>()) {
        let c = Collection::from_values(values);
        let filtered = c.filter(|_, v| *v > threshold);
        prop_assert!(filtered.len() <= c.len());
        prop_assert!(filtered.values().all(|v| *v > threshold));
    }

    /// Pages partition the collection.
    #[test]
    fn pages_cover_collection(values in prop::collection::vec(any::<i64>(), 0..60), per_page in 1usize..10) {
        let c = Collection::from_values(values.clone());
        let pages = values.len().div_ceil(per_page);
        let mut seen = Vec::new();
        for page in 1..=pages {
            seen.extend(c.for_page(page, per_page).to_vec());
        }
        prop_assert_eq!(seen, values);
    }

    /// JSON output parses back into an equal set of entries.
    #[test]
    fn json_preserves_entries(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let c = apply(&ops);
        let json = c.to_json().unwrap();
        let parsed: Collection<i64> = Collection::from_json(&json).unwrap();
        let original: Vec<(Key, i64)> = c.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let restored: Vec<(Key, i64)> = parsed.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(original, restored);
    }

    /// Sorting ascending yields a non-decreasing sequence of the same length.
    #[test]
    fn sort_asc_is_ordered(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let sorted = Collection::from_values(values.clone()).sort_asc().to_vec();
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Splicing removes a contiguous run and puts the replacement in its place.
    #[test]
    fn splice_matches_vec_splice(
        values in prop::collection::vec(any::<i64>(), 0..30),
        offset in 0usize..40,
        length in prop::option::of(0usize..40),
        replacement in prop::collection::vec(any::<i64>(), 0..5),
    ) {
        let mut c = Collection::from_values(values.clone());
        let removed = c.splice(offset, length, replacement.clone());

        let mut expected = values;
        let start = offset.min(expected.len());
        let end = length.map_or(expected.len(), |l| start.saturating_add(l).min(expected.len()));
        let expected_removed: Vec<i64> = expected.splice(start..end, replacement).collect();

        prop_assert_eq!(removed.to_vec(), expected_removed);
        prop_assert_eq!(c.to_vec(), expected);
        prop_assert!(c.is_list());
    }

    /// Final-glue joining is a plain join when there is at most one item.
    #[test]
    fn join_single_item(item in "[a-z]{0,8}") {
        prop_assert_eq!(arr::join(&[item.clone()], ", ", " and "), item);
    }
}
