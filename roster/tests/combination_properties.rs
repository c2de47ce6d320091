//! Property tests for the generator, canonical keys and required-member
//! filtering.

use std::collections::HashSet;

use coalition_roster::{
    binomial, canonical_key, generate_all_combinations, Combination, RequiredMembers,
};
use proptest::prelude::*;

/// `(n, min, max)` with `0 <= min <= max <= n <= 10`.
fn size_range() -> impl Strategy<Value = (usize, usize, usize)> {
    (0usize..=10)
        .prop_flat_map(|n| (Just(n), 0..=n))
        .prop_flat_map(|(n, max)| (Just(n), 0..=max, Just(max)))
}

proptest! {
    #[test]
    fn generator_count_matches_binomial_sum((n, min, max) in size_range()) {
        let all = generate_all_combinations(n, min, max).unwrap();
        let expected: usize = (min..=max).map(|k| binomial(n, k)).sum();
        prop_assert_eq!(all.len(), expected);
    }

    #[test]
    fn generator_output_is_well_formed((n, min, max) in size_range()) {
        let all = generate_all_combinations(n, min, max).unwrap();
        let mut seen = HashSet::new();
        let mut last_size = 0;
        for c in &all {
            prop_assert!((min..=max).contains(&c.len()));
            prop_assert!(c.ids().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(c.ids().iter().all(|&id| id < n));
            prop_assert!(c.len() >= last_size, "sizes must ascend");
            last_size = c.len();
            prop_assert!(seen.insert(c.ids().to_vec()), "duplicate {:?}", c.ids());
        }
    }

    #[test]
    fn canonical_key_ignores_order(ids in Just((0usize..9).collect::<Vec<_>>()).prop_shuffle(), len in 2usize..=9) {
        let members = &ids[..len];
        let mut sorted = members.to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(canonical_key(members).unwrap(), canonical_key(&sorted).unwrap());
    }

    #[test]
    fn required_members_pass_iff_subset(
        subset in proptest::sample::subsequence((0usize..9).collect::<Vec<_>>(), 2..=9),
        required in proptest::sample::subsequence((0usize..9).collect::<Vec<_>>(), 0..=9),
    ) {
        prop_assume!(required.len() <= subset.len());
        let combination = Combination::new(&subset, 9).unwrap();
        let mut selection = RequiredMembers::new(subset.len());
        for &id in &required {
            selection.insert(id).unwrap();
        }
        let contained = required.iter().all(|id| subset.contains(id));
        prop_assert_eq!(selection.admits(&combination), contained);
    }
}

#[test]
fn empty_selection_admits_everything() {
    let selection = RequiredMembers::new(4);
    let all = generate_all_combinations(9, 2, 4).unwrap();
    assert!(all.iter().all(|c| selection.admits(c)));
}
