//! Detail view data for a single combination.

use serde::Serialize;

use crate::combination::Combination;
use crate::labels::{short_size_label, NO_CASES_MESSAGE};
use crate::model::{CaseRecord, Justice, Variant};
use crate::store::OccurrenceStore;

/// What the detail view shows below the member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Occurrences {
    /// Recorded cases in authoring order.
    Recorded {
        /// The cases, never empty.
        cases: Vec<CaseRecord>,
    },
    /// The fixed message for a combination with no record.
    NotYetOccurred {
        /// Message paragraphs.
        message: [&'static str; 2],
    },
}

/// Everything the detail view needs for one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationDetail {
    /// `"<k> Justice Combination"` or, in the restricted variant, `"Pair"`,
    /// `"Trio"` or `"Quad"`.
    pub title: String,
    /// Canonical key.
    pub key: String,
    /// Member full names, with the role title in parentheses when set.
    pub members: Vec<String>,
    /// Recorded cases or the not-yet-occurred message.
    pub occurrences: Occurrences,
}

impl CombinationDetail {
    /// Builds the detail for `combination` from `store` and `roster`.
    #[must_use]
    pub fn build(combination: &Combination, store: &OccurrenceStore, roster: &[Justice]) -> Self {
        let size = combination.len();
        let title = match store.variant() {
            Variant::Full => format!("{size} Justice Combination"),
            Variant::Restricted => short_size_label(size),
        };
        let members = combination
            .ids()
            .iter()
            .filter_map(|&id| roster.get(id))
            .map(Justice::display_line)
            .collect();
        let cases = store.records(combination);
        let occurrences = if cases.is_empty() {
            Occurrences::NotYetOccurred {
                message: NO_CASES_MESSAGE,
            }
        } else {
            Occurrences::Recorded {
                cases: cases.to_vec(),
            }
        };
        Self {
            title,
            key: combination.key(),
            members,
            occurrences,
        }
    }

    /// Whether any case is recorded.
    #[must_use]
    pub fn has_occurred(&self) -> bool {
        matches!(self.occurrences, Occurrences::Recorded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::JUSTICES;
    use crate::model::OpinionType;

    #[test]
    fn full_detail_lists_members_and_cases() {
        let store = OccurrenceStore::for_variant(Variant::Full);
        let combo = Combination::new(&[6, 0], 9).unwrap();
        let detail = CombinationDetail::build(&combo, store, &JUSTICES);
        assert_eq!(detail.title, "2 Justice Combination");
        assert_eq!(
            detail.members,
            vec!["John Roberts (Chief Justice)", "Brett Kavanaugh"]
        );
        let cases: &[CaseRecord] = match &detail.occurrences {
            Occurrences::Recorded { cases } => cases.as_slice(),
            Occurrences::NotYetOccurred { .. } => &[],
        };
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].opinion, Some(OpinionType::Concurrence));
    }

    #[test]
    fn restricted_detail_uses_short_title() {
        let store = OccurrenceStore::for_variant(Variant::Restricted);
        let combo = Combination::new(&[1, 3, 5], 9).unwrap();
        let detail = CombinationDetail::build(&combo, store, &JUSTICES);
        assert_eq!(detail.title, "Trio");
        assert!(!detail.has_occurred());
        assert_eq!(
            detail.occurrences,
            Occurrences::NotYetOccurred {
                message: NO_CASES_MESSAGE
            }
        );
    }
}
