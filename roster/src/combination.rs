//! Combination values and the choose-k enumerator.
//!
//! Enumeration is a depth-first backtracking walk: extend the partial
//! sequence with every index strictly greater than the last one chosen,
//! emit when the target size is reached. Output is grouped by ascending
//! size and lexicographic within a size, which is the order the size
//! groups are displayed in.

use serde::Serialize;

use crate::error::{Result, RosterError};

/// Delimiter between ids in a canonical key.
pub const KEY_DELIMITER: char = ',';

/// A set of justice ids held as a strictly increasing sequence.
///
/// Equality, ordering and hashing are structural over the sorted ids, so
/// two combinations built from the same members in any order are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Combination(Vec<usize>);

impl Combination {
    /// Builds a combination from member ids in any order.
    ///
    /// # Errors
    ///
    /// Fails with [`RosterError::TooFewMembers`] for fewer than two ids,
    /// [`RosterError::DuplicateMember`] if an id repeats, and
    /// [`RosterError::MemberOutOfRange`] if an id is not below `roster`.
    pub fn new(ids: &[usize], roster: usize) -> Result<Self> {
        normalize(ids, roster).map(Self)
    }

    /// Member ids, strictly increasing.
    #[must_use]
    pub fn ids(&self) -> &[usize] {
        &self.0
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the empty combination, which the generator emits
    /// when asked for size 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `id` is a member.
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    /// Canonical key: ascending ids joined with [`KEY_DELIMITER`].
    #[must_use]
    pub fn key(&self) -> String {
        join(&self.0, &KEY_DELIMITER.to_string())
    }

    /// URL-safe form of the key (`"0-1-2"`).
    #[must_use]
    pub fn slug(&self) -> String {
        join(&self.0, "-")
    }
}

/// Sorts `ids` numerically and checks they form a well-formed combination
/// over a roster of `roster` entries.
pub(crate) fn normalize(ids: &[usize], roster: usize) -> Result<Vec<usize>> {
    if ids.len() < 2 {
        return Err(RosterError::TooFewMembers(ids.len()));
    }
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(RosterError::DuplicateMember(pair[0]));
    }
    if let Some(&id) = sorted.last().filter(|&&id| id >= roster) {
        return Err(RosterError::MemberOutOfRange { id, roster });
    }
    Ok(sorted)
}

fn join(ids: &[usize], sep: &str) -> String {
    ids.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Returns C(n, k), or 0 when `k > n`.
#[must_use]
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the
    // division is exact.
    (0..k).fold(1usize, |acc, i| acc * (n - i) / (i + 1))
}

/// Enumerates every `size`-subset of `{0, .., n-1}` in lexicographic order.
#[must_use]
pub fn combinations_of_size(n: usize, size: usize) -> Vec<Combination> {
    let mut result = Vec::with_capacity(binomial(n, size));
    let mut partial = Vec::with_capacity(size);
    extend(0, n, size, &mut partial, &mut result);
    result
}

fn extend(
    start: usize,
    n: usize,
    size: usize,
    partial: &mut Vec<usize>,
    out: &mut Vec<Combination>,
) {
    if partial.len() == size {
        out.push(Combination(partial.clone()));
        return;
    }
    for i in start..n {
        partial.push(i);
        extend(i + 1, n, size, partial, out);
        partial.pop();
    }
}

/// Enumerates every subset of `{0, .., n-1}` whose size lies in
/// `min_size..=max_size`, grouped by ascending size.
///
/// # Errors
///
/// Returns [`RosterError::InvalidSizeRange`] unless
/// `min_size <= max_size <= n`.
pub fn generate_all_combinations(
    n: usize,
    min_size: usize,
    max_size: usize,
) -> Result<Vec<Combination>> {
    if min_size > max_size || max_size > n {
        return Err(RosterError::InvalidSizeRange {
            min: min_size,
            max: max_size,
            n,
        });
    }
    let total = (min_size..=max_size).map(|k| binomial(n, k)).sum();
    let mut all = Vec::with_capacity(total);
    for size in min_size..=max_size {
        all.extend(combinations_of_size(n, size));
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(all: &[Combination]) -> Vec<Vec<usize>> {
        all.iter().map(|c| c.ids().to_vec()).collect()
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(9, 2), 36);
        assert_eq!(binomial(9, 4), 126);
        assert_eq!(binomial(9, 9), 1);
        assert_eq!(binomial(9, 0), 1);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn emission_order_is_lexicographic_within_size() {
        let all = generate_all_combinations(4, 2, 3).unwrap();
        assert_eq!(
            ids(&all),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![0, 1, 2],
                vec![0, 1, 3],
                vec![0, 2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn size_zero_yields_the_empty_set() {
        let all = generate_all_combinations(3, 0, 0).unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            generate_all_combinations(9, 5, 3),
            Err(RosterError::InvalidSizeRange { min: 5, max: 3, n: 9 })
        );
        assert!(generate_all_combinations(4, 2, 5).is_err());
    }

    #[test]
    fn new_sorts_and_validates() {
        let c = Combination::new(&[2, 0, 1], 9).unwrap();
        assert_eq!(c.ids(), &[0, 1, 2]);
        assert_eq!(c.key(), "0,1,2");
        assert_eq!(c.slug(), "0-1-2");
        assert!(c.contains(1));
        assert!(!c.contains(3));

        assert_eq!(Combination::new(&[4], 9), Err(RosterError::TooFewMembers(1)));
        assert_eq!(
            Combination::new(&[4, 4], 9),
            Err(RosterError::DuplicateMember(4))
        );
        assert_eq!(
            Combination::new(&[1, 9], 9),
            Err(RosterError::MemberOutOfRange { id: 9, roster: 9 })
        );
    }

    #[test]
    fn keys_sort_numerically_not_lexically() {
        let c = Combination::new(&[10, 2], 11).unwrap();
        assert_eq!(c.key(), "2,10");
    }
}
