#![cfg(feature = "hash")]
//! Property-based tests for HashSet.

use std::collections::HashSet as StdHashSet;

use keyed_set::collections::hash::HashSet;
use proptest::prelude::*;

type Pair = (u8, u8);

fn first(pair: &Pair) -> u8 {
    pair.0
}

const KEY: fn(&Pair) -> u8 = first;

/// The first value seen for each key, in the order keys were first seen.
fn first_occurrences(values: &[Pair]) -> Vec<Pair> {
    let mut seen = StdHashSet::new();
    values.iter().copied().filter(|pair| seen.insert(pair.0)).collect()
}

fn pairs() -> impl Strategy<Value = Vec<Pair>> {
    prop::collection::vec((0u8..20, any::<u8>()), 0..100)
}

proptest! {
    #[test]
    fn prop_len_is_distinct_key_count(values in pairs()) {
        let set = HashSet::from_iter_with(values.iter().copied(), KEY);
        let keys: StdHashSet<u8> = values.iter().map(first).collect();

        prop_assert_eq!(set.len(), keys.len());
    }

    #[test]
    fn prop_first_occurrence_wins(values in pairs()) {
        let set = HashSet::from_iter_with(values.iter().copied(), KEY);

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), first_occurrences(&values));
    }

    #[test]
    fn prop_contains_until_removed(values in pairs(), probe in 0u8..20) {
        let mut set = HashSet::from_iter_with(values.iter().copied(), KEY);
        let present = values.iter().any(|pair| pair.0 == probe);

        prop_assert_eq!(set.contains(&(probe, 0)), present);
        prop_assert_eq!(set.remove(&(probe, 0)), present);
        prop_assert!(!set.contains(&(probe, 0)));
        prop_assert!(!set.remove(&(probe, 0)), "A second removal should report nothing removed.");
    }

    #[test]
    fn prop_removal_keeps_remaining_order(values in pairs(), removed in prop::collection::vec(0u8..20, 0..20)) {
        let mut set = HashSet::from_iter_with(values.iter().copied(), KEY);
        for key in &removed {
            set.remove_key(key);
        }

        let expected: Vec<Pair> = first_occurrences(&values)
            .into_iter()
            .filter(|pair| !removed.contains(&pair.0))
            .collect();
        prop_assert_eq!(set.len(), expected.len());
        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_clear_empties(values in pairs()) {
        let mut set = HashSet::from_iter_with(values.iter().copied(), KEY);
        set.clear();

        prop_assert!(set.is_empty());
        prop_assert_eq!(set.iter().next(), None);
        prop_assert!(values.iter().all(|pair| !set.contains(pair)));
    }

    #[test]
    fn prop_sequences_agree(values in pairs()) {
        let set = HashSet::from_iter_with(values.iter().copied(), KEY);
        let expected = set.values().collect::<Vec<_>>();

        prop_assert_eq!(set.keys().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(set.entries().map(|(value, _)| value).collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(set.entries().map(|(_, key)| key).collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(set.iter().rev().collect::<Vec<_>>(), expected.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn prop_for_each_visits_once_in_order(values in pairs()) {
        let set = HashSet::from_iter_with(values.iter().copied(), KEY);
        let mut visited = Vec::new();

        set.for_each(|value, _, _| visited.push(*value));

        prop_assert_eq!(visited, set.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_reinsert_after_remove_moves_to_back(values in pairs(), key in 0u8..20) {
        let mut set = HashSet::from_iter_with(values.iter().copied(), KEY);
        prop_assume!(set.contains_key(&key));

        let taken = set.remove_key(&key);
        prop_assert!(taken.is_some());
        set.add((key, 0));

        prop_assert_eq!(set.last(), Some(&(key, 0)));
    }

    #[test]
    fn prop_std_set_matches(values in pairs()) {
        let set = HashSet::from_iter_with(values.iter().copied(), KEY);
        let native: StdHashSet<Pair> = first_occurrences(&values).into_iter().collect();

        prop_assert_eq!(set.to_std_set(), native.clone());
        prop_assert_eq!(set.into_std_set(), native);
    }
}
