//! Size filters, required-member selections and size-group summaries.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::combination::Combination;
use crate::error::{Result, RosterError};
use crate::store::OccurrenceStore;

/// The active size filter: every size group, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeFilter {
    /// Show every size group.
    #[default]
    All,
    /// Show only combinations of exactly this size.
    Size(usize),
}

impl SizeFilter {
    /// Whether a size group passes the filter.
    #[must_use]
    pub fn passes_size(self, size: usize) -> bool {
        match self {
            SizeFilter::All => true,
            SizeFilter::Size(k) => k == size,
        }
    }

    /// Whether a combination passes the filter.
    #[must_use]
    pub fn passes(self, combination: &Combination) -> bool {
        self.passes_size(combination.len())
    }
}

impl fmt::Display for SizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeFilter::All => f.write_str("all"),
            SizeFilter::Size(k) => write!(f, "{k}"),
        }
    }
}

impl FromStr for SizeFilter {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(SizeFilter::All);
        }
        s.parse::<usize>()
            .map(SizeFilter::Size)
            .map_err(|_| RosterError::InvalidSizeFilter(s.to_string()))
    }
}

/// Ids that every displayed combination in one size bucket must contain.
///
/// The selection never holds more ids than the bucket's size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredMembers {
    cap: usize,
    members: BTreeSet<usize>,
}

impl RequiredMembers {
    /// An empty selection for a bucket of combinations of size `cap`.
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            members: BTreeSet::new(),
        }
    }

    /// Maximum number of required ids.
    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of required ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when nothing is required, so every combination passes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True once the cap is reached and further ids are refused.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.cap
    }

    /// Whether `id` is required.
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        self.members.contains(&id)
    }

    /// Required ids, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// Adds `id` to the selection. Adding an id already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SelectionFull`] when the cap is reached.
    pub fn insert(&mut self, id: usize) -> Result<()> {
        if self.members.contains(&id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(RosterError::SelectionFull { size: self.cap });
        }
        self.members.insert(id);
        Ok(())
    }

    /// Selects `id` if unselected, otherwise deselects it. Returns whether
    /// `id` is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SelectionFull`] when selecting past the cap.
    pub fn toggle(&mut self, id: usize) -> Result<bool> {
        if self.members.remove(&id) {
            return Ok(false);
        }
        self.insert(id)?;
        Ok(true)
    }

    /// Drops every required id.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Whether `combination` contains every required id (set containment).
    #[must_use]
    pub fn admits(&self, combination: &Combination) -> bool {
        self.members.iter().all(|&id| combination.contains(id))
    }
}

/// Header statistics for one size group.
///
/// `occurred_count` and `total_count` always describe the whole size group;
/// only `displayed_count` reflects a required-members selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Combination size k.
    pub size: usize,
    /// Combinations left after required-member filtering.
    pub displayed_count: usize,
    /// Combinations of this size with a recorded case.
    pub occurred_count: usize,
    /// C(n, k).
    pub total_count: usize,
}

impl GroupSummary {
    /// Header text, e.g. `"Trios (3 Justices) (6 of 84 occurred)"`.
    #[must_use]
    pub fn header(&self) -> String {
        crate::labels::group_header(self.size, self.occurred_count, self.total_count)
    }
}

/// Groups combinations by size, preserving their order within each group.
#[must_use]
pub fn group_by_size(all: &[Combination]) -> BTreeMap<usize, Vec<&Combination>> {
    let mut groups: BTreeMap<usize, Vec<&Combination>> = BTreeMap::new();
    for combination in all {
        groups.entry(combination.len()).or_default().push(combination);
    }
    groups
}

/// Summarizes a full size group given how many of it are displayed.
#[must_use]
pub fn summarize_group(
    size: usize,
    group: &[&Combination],
    displayed_count: usize,
    store: &OccurrenceStore,
) -> GroupSummary {
    GroupSummary {
        size,
        displayed_count,
        occurred_count: group.iter().filter(|c| store.contains(c)).count(),
        total_count: group.len(),
    }
}
