//! Triangular adjacency matrix over pairs.
//!
//! Cell `(row, col)` with `row > col` stands for the pair `{col, row}`. The
//! diagonal and the upper triangle are empty.

use serde::Serialize;

use crate::combination::Combination;
use crate::store::OccurrenceStore;

/// One matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Diagonal or upper triangle.
    Empty,
    /// A lower-triangle cell for one pair.
    Pair {
        /// The pair, ascending.
        combination: Combination,
        /// Whether the pair has a recorded case.
        occurred: bool,
        /// Number of recorded cases.
        case_count: usize,
    },
}

/// Square matrix of [`Cell`]s indexed by justice id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairMatrix {
    rows: Vec<Vec<Cell>>,
}

impl PairMatrix {
    /// Builds the matrix for a roster of `n` justices.
    #[must_use]
    pub fn build(n: usize, store: &OccurrenceStore) -> Self {
        let rows = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| {
                        if row <= col {
                            return Cell::Empty;
                        }
                        let Ok(combination) = Combination::new(&[col, row], n) else {
                            return Cell::Empty;
                        };
                        let case_count = store.records(&combination).len();
                        Cell::Pair {
                            combination,
                            occurred: case_count > 0,
                            case_count,
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Rows in id order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Variant;

    #[test]
    fn only_lower_triangle_is_populated() {
        let store = OccurrenceStore::for_variant(Variant::Restricted);
        let matrix = PairMatrix::build(9, store);
        assert_eq!(matrix.dimension(), 9);
        let populated = matrix
            .rows()
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Pair { .. }))
            .count();
        assert_eq!(populated, 36);
        assert_eq!(matrix.cell(3, 3), Some(&Cell::Empty));
        assert_eq!(matrix.cell(0, 6), Some(&Cell::Empty));
    }

    #[test]
    fn lower_cell_reflects_store() {
        let store = OccurrenceStore::for_variant(Variant::Restricted);
        let matrix = PairMatrix::build(9, store);
        let expected = Cell::Pair {
            combination: Combination::new(&[0, 6], 9).unwrap(),
            occurred: true,
            case_count: 1,
        };
        assert_eq!(matrix.cell(6, 0), Some(&expected));
        assert!(matches!(
            matrix.cell(2, 1),
            Some(Cell::Pair { occurred: true, .. })
        ));
        assert!(matches!(
            matrix.cell(8, 7),
            Some(Cell::Pair { occurred: false, .. })
        ));
    }
}
