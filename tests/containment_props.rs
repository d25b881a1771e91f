//! Property tests for map containment.

use attest::expect;
use proptest::prelude::*;
use std::collections::HashMap;

fn arb_map() -> impl Strategy<Value = HashMap<String, i32>> {
    prop::collection::hash_map("[a-d]{1,3}", -100i32..100, 1..8)
}

proptest! {
    /// Any subset of a map's own entries is contained.
    #[test]
    fn subset_of_entries_is_contained(map in arb_map(), mask in prop::collection::vec(any::<bool>(), 8)) {
        let subset: Vec<(String, i32)> = map
            .iter()
            .zip(mask.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|((k, v), _)| (k.clone(), *v))
            .collect();
        prop_assume!(!subset.is_empty());

        prop_assert!(expect(&map).to_contain_pairs(subset).evaluate().passed());
    }

    /// Expected-pair order never affects the outcome.
    #[test]
    fn containment_is_order_independent(map in arb_map()) {
        let mut pairs: Vec<(String, i32)> =
            map.iter().map(|(k, v)| (k.clone(), *v)).collect();

        let forward = expect(&map).to_contain_pairs(pairs.clone()).evaluate().passed();
        pairs.reverse();
        let backward = expect(&map).to_contain_pairs(pairs).evaluate().passed();

        prop_assert!(forward);
        prop_assert!(backward);
    }

    /// Adding a pair whose key is absent always fails, and the report
    /// still accounts for every expected pair.
    #[test]
    fn absent_key_fails_containment(map in arb_map(), value in any::<i32>()) {
        let mut pairs: Vec<(String, i32)> =
            map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        pairs.push(("never-generated".to_string(), value));

        let report = expect(&map).to_contain_pairs(pairs).evaluate();
        prop_assert!(!report.passed());
        prop_assert_eq!(report.failure_count(), 1);
    }

    /// A present key with a wrong value fails containment.
    #[test]
    fn wrong_value_fails_containment(map in arb_map()) {
        let (key, value) = map.iter().next().map(|(k, v)| (k.clone(), *v)).unwrap();

        let report = expect(&map).to_contain_pairs(vec![(key, value + 1)]).evaluate();
        prop_assert!(!report.passed());
    }
}
