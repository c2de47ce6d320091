//! Canonicalization and the read-only occurrence store.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::combination::{Combination, KEY_DELIMITER};
use crate::data::{CASES, ROSTER_SIZE};
use crate::error::{Result, RosterError};
use crate::model::{CaseRecord, OpinionType, Variant};

/// Returns the canonical key for a set of roster ids given in any order.
///
/// `[2, 0, 1]`, `[1, 0, 2]` and `[0, 1, 2]` all map to `"0,1,2"`.
///
/// # Errors
///
/// Fails fast on malformed input: fewer than two ids, a repeated id, or an
/// id outside the roster.
pub fn canonical_key(ids: &[usize]) -> Result<String> {
    Combination::new(ids, ROSTER_SIZE).map(|c| c.key())
}

/// Maps canonical keys to their recorded cases for one variant.
///
/// Built once per variant from the literal table and shared for the
/// process lifetime; it exposes lookups only.
#[derive(Debug)]
pub struct OccurrenceStore {
    variant: Variant,
    records: HashMap<&'static str, Vec<CaseRecord>>,
    order: Vec<&'static str>,
}

impl OccurrenceStore {
    /// Returns the shared store for `variant`.
    ///
    /// The restricted store keeps only keys of two to four members and
    /// strips the opinion type from every record.
    #[must_use]
    pub fn for_variant(variant: Variant) -> &'static OccurrenceStore {
        static FULL: OnceLock<OccurrenceStore> = OnceLock::new();
        static RESTRICTED: OnceLock<OccurrenceStore> = OnceLock::new();
        let cell = match variant {
            Variant::Full => &FULL,
            Variant::Restricted => &RESTRICTED,
        };
        cell.get_or_init(|| Self::from_table(variant, CASES))
    }

    /// Builds a store from a literal table, projecting it onto `variant`.
    ///
    /// Keys are taken as authored; the data inventory in the conformance
    /// suite checks that they are canonical.
    #[must_use]
    pub fn from_table(variant: Variant, table: &[(&'static str, &'static [CaseRecord])]) -> Self {
        let mut records = HashMap::with_capacity(table.len());
        let mut order = Vec::with_capacity(table.len());
        for &(key, cases) in table {
            if cases.is_empty() || !variant.size_range().contains(&key_size(key)) {
                continue;
            }
            let projected = cases
                .iter()
                .map(|case| CaseRecord {
                    opinion: case.opinion.filter(|_| variant.is_typed()),
                    ..case.clone()
                })
                .collect();
            if records.insert(key, projected).is_none() {
                order.push(key);
            }
        }
        Self {
            variant,
            records,
            order,
        }
    }

    /// The variant this store was projected onto.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of combinations with at least one record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no combination has occurred.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Occurred keys in authoring order.
    pub fn occurred_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// `(key, records)` pairs in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &[CaseRecord])> + '_ {
        self.order.iter().map(|&key| (key, self.lookup(key)))
    }

    /// Whether the combination of `ids` (any order) has a recorded case.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed input, including more members than the
    /// variant renders. A well-formed combination without records is
    /// `Ok(false)`, not an error.
    pub fn has_occurred(&self, ids: &[usize]) -> Result<bool> {
        self.records_for(ids).map(|records| !records.is_empty())
    }

    /// Recorded cases for the combination of `ids`, in authoring order;
    /// empty when it never occurred.
    ///
    /// # Errors
    ///
    /// Same conditions as [`has_occurred`](Self::has_occurred).
    pub fn records_for(&self, ids: &[usize]) -> Result<&[CaseRecord]> {
        let combination = Combination::new(ids, ROSTER_SIZE)?;
        let max = self.variant.max_size();
        if combination.len() > max {
            return Err(RosterError::TooManyMembers {
                len: combination.len(),
                max,
            });
        }
        Ok(self.records(&combination))
    }

    /// Whether an already-normalized combination has occurred.
    #[must_use]
    pub fn contains(&self, combination: &Combination) -> bool {
        !self.records(combination).is_empty()
    }

    /// Recorded cases for an already-normalized combination.
    #[must_use]
    pub fn records(&self, combination: &Combination) -> &[CaseRecord] {
        self.lookup(&combination.key())
    }

    /// Type of the first record, which drives the card badge.
    #[must_use]
    pub fn primary_type(&self, combination: &Combination) -> Option<OpinionType> {
        self.records(combination).first().and_then(|r| r.opinion)
    }

    fn lookup(&self, key: &str) -> &[CaseRecord] {
        self.records.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn key_size(key: &str) -> usize {
    key.split(KEY_DELIMITER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_is_permutation_invariant() {
        assert_eq!(canonical_key(&[2, 0, 1]).unwrap(), "0,1,2");
        assert_eq!(canonical_key(&[1, 0, 2]).unwrap(), "0,1,2");
        assert_eq!(canonical_key(&[0, 1, 2]).unwrap(), "0,1,2");
    }

    #[test]
    fn canonical_key_rejects_malformed_input() {
        assert_eq!(canonical_key(&[]), Err(RosterError::TooFewMembers(0)));
        assert_eq!(canonical_key(&[3]), Err(RosterError::TooFewMembers(1)));
        assert_eq!(canonical_key(&[3, 3]), Err(RosterError::DuplicateMember(3)));
        assert_eq!(
            canonical_key(&[0, 12]),
            Err(RosterError::MemberOutOfRange { id: 12, roster: 9 })
        );
    }

    #[test]
    fn unanimous_bench_has_one_record() {
        let store = OccurrenceStore::for_variant(Variant::Full);
        let all: Vec<usize> = (0..9).collect();
        assert!(store.has_occurred(&all).unwrap());
        let records = store.records_for(&all).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_name, "Smith v. United States");
        assert_eq!(records[0].opinion, Some(OpinionType::Majority));
    }

    #[test]
    fn miss_is_empty_not_error() {
        let store = OccurrenceStore::for_variant(Variant::Full);
        assert!(!store.has_occurred(&[1, 3, 5]).unwrap());
        assert!(store.records_for(&[5, 3, 1]).unwrap().is_empty());
    }

    #[test]
    fn records_keep_authoring_order() {
        let store = OccurrenceStore::for_variant(Variant::Full);
        let records = store.records_for(&[8, 4, 3]).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.case_name).collect();
        assert_eq!(
            names,
            vec![
                "Wilson v. State of Florida",
                "Thompson v. United States Postal Service"
            ]
        );
    }

    #[test]
    fn restricted_store_is_type_free_and_small() {
        let store = OccurrenceStore::for_variant(Variant::Restricted);
        assert_eq!(store.len(), 12);
        let records = store.records_for(&[6, 0]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_name, "Harris v. State of Georgia");
        assert_eq!(records[0].opinion, None);
        assert!(store.occurred_keys().all(|k| key_size(k) <= 4));
    }

    #[test]
    fn restricted_store_rejects_oversized_combinations() {
        let store = OccurrenceStore::for_variant(Variant::Restricted);
        assert_eq!(
            store.has_occurred(&[0, 1, 2, 3, 4]),
            Err(RosterError::TooManyMembers { len: 5, max: 4 })
        );
    }

    #[test]
    fn primary_type_is_first_record() {
        let store = OccurrenceStore::for_variant(Variant::Full);
        let trio = Combination::new(&[3, 4, 8], 9).unwrap();
        assert_eq!(store.primary_type(&trio), Some(OpinionType::Dissent));
        let miss = Combination::new(&[1, 3], 9).unwrap();
        assert_eq!(store.primary_type(&miss), None);
    }
}
