//! Universe-wide statistics.

use serde::Serialize;

use crate::combination::Combination;
use crate::error::{Result, RosterError};
use crate::store::OccurrenceStore;

/// Total and occurred combination counts for the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of generated combinations.
    pub total_combinations: usize,
    /// Number of those with a recorded case.
    pub occurred_count: usize,
}

impl Statistics {
    /// Counts `all` against `store`.
    #[must_use]
    pub fn compute(all: &[Combination], store: &OccurrenceStore) -> Self {
        Self {
            total_combinations: all.len(),
            occurred_count: all.iter().filter(|c| store.contains(c)).count(),
        }
    }

    /// Occurred share as a percentage, `occurred / total * 100`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyUniverse`] when there are no combinations.
    pub fn completion_rate(&self) -> Result<f64> {
        if self.total_combinations == 0 {
            return Err(RosterError::EmptyUniverse);
        }
        Ok(self.occurred_count as f64 / self.total_combinations as f64 * 100.0)
    }

    /// Completion rate to one decimal place with a trailing `%`. Ties
    /// round away from zero (`6.25` gives `"6.3%"`).
    ///
    /// # Errors
    ///
    /// Same conditions as [`completion_rate`](Self::completion_rate).
    pub fn completion_rate_label(&self) -> Result<String> {
        let tenths = (self.completion_rate()? * 10.0).round() / 10.0;
        Ok(format!("{:.1}%", tenths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_of_502_is_four_percent() {
        let stats = Statistics {
            total_combinations: 502,
            occurred_count: 20,
        };
        assert_eq!(stats.completion_rate_label().unwrap(), "4.0%");
    }

    #[test]
    fn empty_universe_fails_fast() {
        let stats = Statistics {
            total_combinations: 0,
            occurred_count: 0,
        };
        assert_eq!(stats.completion_rate(), Err(RosterError::EmptyUniverse));
    }

    #[test]
    fn rounds_to_one_decimal() {
        let stats = Statistics {
            total_combinations: 3,
            occurred_count: 2,
        };
        assert_eq!(stats.completion_rate_label().unwrap(), "66.7%");
    }

    #[test]
    fn ties_round_up() {
        let one = Statistics {
            total_combinations: 16,
            occurred_count: 1,
        };
        assert_eq!(one.completion_rate_label().unwrap(), "6.3%");
        let five = Statistics {
            total_combinations: 16,
            occurred_count: 5,
        };
        assert_eq!(five.completion_rate_label().unwrap(), "31.3%");
    }
}
