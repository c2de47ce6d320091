//! Core roster model types.
//!
//! These types describe the fixed justice roster, the recorded co-signings
//! attached to a combination, and the two build variants of the browser.
//! All literal data is `'static`; the entry points are
//! [`justices()`](crate::justices) and
//! [`OccurrenceStore::for_variant`](crate::OccurrenceStore::for_variant).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// One member of the fixed roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Justice {
    /// Dense index into the roster, `0..N`.
    pub id: usize,
    /// Full name (e.g., `"John Roberts"`).
    pub name: &'static str,
    /// Surname shown on combination cards (e.g., `"Roberts"`).
    #[serde(rename = "shortName")]
    pub short_name: &'static str,
    /// Optional role title (e.g., `"Chief Justice"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
}

impl Justice {
    /// Returns the detail-view line: the full name, followed by the role
    /// title in parentheses when one is set.
    #[must_use]
    pub fn display_line(&self) -> String {
        match self.title {
            Some(title) => format!("{} ({})", self.name, title),
            None => self.name.to_string(),
        }
    }
}

/// The role a combination played in a recorded case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpinionType {
    /// Signed the majority opinion.
    Majority,
    /// Joined a concurrence.
    Concurrence,
    /// Joined a dissent.
    Dissent,
}

impl OpinionType {
    /// Returns the lowercase tag used in CSS classes and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OpinionType::Majority => "majority",
            OpinionType::Concurrence => "concurrence",
            OpinionType::Dissent => "dissent",
        }
    }

    /// Returns the capitalized badge text (e.g., `"Dissent"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OpinionType::Majority => "Majority",
            OpinionType::Concurrence => "Concurrence",
            OpinionType::Dissent => "Dissent",
        }
    }
}

/// A recorded case in which a combination signed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    /// Case caption (e.g., `"Smith v. United States"`).
    #[serde(rename = "caseName")]
    pub case_name: &'static str,
    /// Decision date, ISO 8601 (`YYYY-MM-DD`).
    pub date: &'static str,
    /// Reporter citation (e.g., `"601 U.S. 123"`).
    pub citation: &'static str,
    /// Opinion role; always set in the full variant, never in the restricted one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub opinion: Option<OpinionType>,
}

/// Which build of the browser is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Every combination of two through nine justices; typed records.
    #[default]
    Full,
    /// Pairs, trios and quads only; type-free records, required-member
    /// filtering and the pair matrix.
    Restricted,
}

impl Variant {
    /// Smallest combination size rendered by every variant.
    pub const MIN_SIZE: usize = 2;

    /// Returns the largest combination size for this variant.
    #[must_use]
    pub fn max_size(self) -> usize {
        match self {
            Variant::Full => 9,
            Variant::Restricted => 4,
        }
    }

    /// Returns the supported size range, `MIN_SIZE..=max_size()`.
    #[must_use]
    pub fn size_range(self) -> RangeInclusive<usize> {
        Self::MIN_SIZE..=self.max_size()
    }

    /// Whether case records carry an [`OpinionType`].
    #[must_use]
    pub fn is_typed(self) -> bool {
        matches!(self, Variant::Full)
    }

    /// Whether size buckets accept a required-members selection.
    #[must_use]
    pub fn supports_required_members(self) -> bool {
        matches!(self, Variant::Restricted)
    }

    /// Returns the lowercase name used in configuration files and flags.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Restricted => "restricted",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = crate::RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Variant::Full),
            "restricted" => Ok(Variant::Restricted),
            other => Err(crate::RosterError::UnknownVariant(other.to_string())),
        }
    }
}
