//! The justice roster and its combination universe, encoded as typed Rust data.
//!
//! The `coalition-roster` crate provides the fixed nine-justice roster, a
//! literal table of recorded co-signings keyed by combination, the
//! choose-k generator over the roster, and the filtering and summary logic
//! a browser needs to render every combination of two or more justices.
//!
//! # Entry Point
//!
//! ```
//! use coalition_roster::{Session, Variant};
//!
//! let session = Session::new(Variant::Full).expect("roster fits the variant");
//! assert_eq!(session.combinations().len(), 502);
//! ```
//!
//! # Lookups
//!
//! ```
//! use coalition_roster::{canonical_key, OccurrenceStore, Variant};
//!
//! assert_eq!(canonical_key(&[2, 0, 1]).unwrap(), "0,1,2");
//! let store = OccurrenceStore::for_variant(Variant::Restricted);
//! assert!(store.has_occurred(&[6, 0]).unwrap());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod combination;
pub mod data;
pub mod detail;
pub mod error;
pub mod filter;
pub mod labels;
pub mod matrix;
pub mod model;
pub mod serializer;
pub mod session;
pub mod stats;
pub mod store;

pub use combination::{binomial, combinations_of_size, generate_all_combinations, Combination};
pub use detail::{CombinationDetail, Occurrences};
pub use error::RosterError;
pub use filter::{GroupSummary, RequiredMembers, SizeFilter};
pub use matrix::{Cell, PairMatrix};
pub use model::{CaseRecord, Justice, OpinionType, Variant};
pub use session::{Session, SizeGroup};
pub use stats::Statistics;
pub use store::{canonical_key, OccurrenceStore};

/// Returns the fixed roster in id order.
#[must_use]
pub fn justices() -> &'static [Justice] {
    &data::JUSTICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_are_dense() {
        for (i, justice) in justices().iter().enumerate() {
            assert_eq!(justice.id, i, "Roster entry {} has id {}", i, justice.id);
        }
        assert_eq!(justices().len(), data::ROSTER_SIZE);
    }

    #[test]
    fn only_the_chief_has_a_title() {
        let titled: Vec<_> = justices().iter().filter(|j| j.title.is_some()).collect();
        assert_eq!(titled.len(), 1);
        assert_eq!(titled[0].short_name, "Roberts");
    }

    #[test]
    fn table_keys_are_canonical_and_unique() {
        let mut keys = std::collections::HashSet::new();
        for (key, records) in data::CASES {
            let ids: Vec<usize> = key
                .split(',')
                .map(|id| id.parse().unwrap())
                .collect();
            assert_eq!(canonical_key(&ids).unwrap(), *key, "Non-canonical key {key}");
            assert!(!records.is_empty(), "Empty record list under {key}");
            assert!(keys.insert(*key), "Duplicate key {key}");
        }
        // 20 recorded combinations, every record typed.
        assert_eq!(keys.len(), 20);
        assert!(data::CASES
            .iter()
            .flat_map(|(_, records)| records.iter())
            .all(|r| r.opinion.is_some()));
    }
}
