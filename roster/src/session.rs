//! Browser session state.
//!
//! A [`Session`] is built once at startup and owned by the presentation
//! layer. It caches the generated universe and statistics, and holds the
//! only mutable state: the active size filter and, in the restricted
//! variant, one required-members selection per size bucket. Every update
//! is a plain `&mut self` call that completes before the next render reads
//! the session.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::combination::{generate_all_combinations, Combination};
use crate::data::{JUSTICES, ROSTER_SIZE};
use crate::detail::CombinationDetail;
use crate::error::{Result, RosterError};
use crate::filter::{group_by_size, summarize_group, GroupSummary, RequiredMembers, SizeFilter};
use crate::matrix::PairMatrix;
use crate::model::{Justice, Variant};
use crate::stats::Statistics;
use crate::store::OccurrenceStore;

/// One rendered size group: its header summary and the combinations that
/// pass the current selection, in generation order.
#[derive(Debug, Clone)]
pub struct SizeGroup<'a> {
    /// Header statistics over the whole group.
    pub summary: GroupSummary,
    /// Displayed combinations.
    pub combinations: Vec<&'a Combination>,
}

/// Startup-built state for one variant of the browser.
#[derive(Debug)]
pub struct Session {
    variant: Variant,
    store: &'static OccurrenceStore,
    combinations: Vec<Combination>,
    statistics: Statistics,
    size_filter: SizeFilter,
    required: BTreeMap<usize, RequiredMembers>,
}

impl Session {
    /// Generates the universe for `variant` and starts with filter ALL.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidSizeRange`] if the variant's sizes do
    /// not fit the roster.
    pub fn new(variant: Variant) -> Result<Self> {
        let store = OccurrenceStore::for_variant(variant);
        let combinations =
            generate_all_combinations(ROSTER_SIZE, Variant::MIN_SIZE, variant.max_size())?;
        let statistics = Statistics::compute(&combinations, store);

        info!(
            variant = variant.as_str(),
            total = statistics.total_combinations,
            occurred = statistics.occurred_count,
            "generated combination universe"
        );
        for (size, group) in group_by_size(&combinations) {
            debug!(size, count = group.len(), "combinations by size");
        }

        // Pairs are browsed through the matrix, so buckets start at trios.
        let required = if variant.supports_required_members() {
            variant
                .size_range()
                .filter(|&size| size > Variant::MIN_SIZE)
                .map(|size| (size, RequiredMembers::new(size)))
                .collect()
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            variant,
            store,
            combinations,
            statistics,
            size_filter: SizeFilter::All,
            required,
        })
    }

    /// The variant this session serves.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The occurrence store for this variant.
    #[must_use]
    pub fn store(&self) -> &'static OccurrenceStore {
        self.store
    }

    /// The fixed roster.
    #[must_use]
    pub fn roster(&self) -> &'static [Justice] {
        &JUSTICES
    }

    /// Every generated combination, grouped by ascending size.
    #[must_use]
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Statistics computed at startup.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// The active size filter.
    #[must_use]
    pub fn size_filter(&self) -> SizeFilter {
        self.size_filter
    }

    /// Moves to filter state `filter` and clears every required-members
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnsupportedSize`] for a size the variant does
    /// not render.
    pub fn select_size(&mut self, filter: SizeFilter) -> Result<()> {
        if let SizeFilter::Size(size) = filter {
            self.check_size(size)?;
        }
        self.size_filter = filter;
        self.required.values_mut().for_each(RequiredMembers::clear);
        debug!(filter = %filter, "size filter selected");
        Ok(())
    }

    /// Required-members selection for `size`, if the variant has one.
    #[must_use]
    pub fn required(&self, size: usize) -> Option<&RequiredMembers> {
        self.required.get(&size)
    }

    /// Toggles justice `id` in the `size` bucket's selection and returns
    /// whether it is now required.
    ///
    /// # Errors
    ///
    /// Fails when the variant has no required-member filter, when `size`
    /// has no bucket (pairs, or a size the variant does not render), when
    /// `id` is not on the roster, or when selecting
    /// past the bucket's cap.
    pub fn toggle_required_member(&mut self, size: usize, id: usize) -> Result<bool> {
        if id >= ROSTER_SIZE {
            return Err(RosterError::MemberOutOfRange {
                id,
                roster: ROSTER_SIZE,
            });
        }
        let selected = self.bucket_mut(size)?.toggle(id)?;
        debug!(size, id, selected, "required member toggled");
        Ok(selected)
    }

    /// Clears the `size` bucket's selection, restoring every combination of
    /// that size.
    ///
    /// # Errors
    ///
    /// Same variant and size conditions as
    /// [`toggle_required_member`](Self::toggle_required_member).
    pub fn clear_required(&mut self, size: usize) -> Result<()> {
        self.bucket_mut(size)?.clear();
        Ok(())
    }

    /// Size groups passing the current filter, each narrowed by its
    /// required-members selection. Header counts cover the whole group.
    #[must_use]
    pub fn visible_groups(&self) -> Vec<SizeGroup<'_>> {
        group_by_size(&self.combinations)
            .into_iter()
            .filter(|(size, _)| self.size_filter.passes_size(*size))
            .map(|(size, group)| {
                let displayed: Vec<&Combination> = match self.required.get(&size) {
                    Some(required) => group
                        .iter()
                        .copied()
                        .filter(|c| required.admits(c))
                        .collect(),
                    None => group.clone(),
                };
                SizeGroup {
                    summary: summarize_group(size, &group, displayed.len(), self.store),
                    combinations: displayed,
                }
            })
            .collect()
    }

    /// Detail view for the combination of `ids`, in any order.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed ids or a size the variant does not render.
    pub fn detail(&self, ids: &[usize]) -> Result<CombinationDetail> {
        let combination = Combination::new(ids, ROSTER_SIZE)?;
        self.check_size(combination.len())?;
        Ok(CombinationDetail::build(&combination, self.store, self.roster()))
    }

    /// The pair matrix, shown in place of the pairs grid by the restricted
    /// variant.
    #[must_use]
    pub fn pair_matrix(&self) -> Option<PairMatrix> {
        match self.variant {
            Variant::Restricted => Some(PairMatrix::build(ROSTER_SIZE, self.store)),
            Variant::Full => None,
        }
    }

    fn check_size(&self, size: usize) -> Result<()> {
        if self.variant.size_range().contains(&size) {
            Ok(())
        } else {
            Err(RosterError::UnsupportedSize(size))
        }
    }

    fn bucket_mut(&mut self, size: usize) -> Result<&mut RequiredMembers> {
        if !self.variant.supports_required_members() {
            return Err(RosterError::RequiredMembersUnsupported(self.variant));
        }
        self.check_size(size)?;
        self.required
            .get_mut(&size)
            .ok_or(RosterError::UnsupportedSize(size))
    }
}
