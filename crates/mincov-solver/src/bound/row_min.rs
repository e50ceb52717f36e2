use mincov_core::{Cost, CoverMatrix};

use super::LowerBound;

/// Cost of the hardest single row.
///
/// Every row must be covered, so the largest per-row cheapest column is a
/// bound on the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMinBound;

impl RowMinBound {
    pub fn new() -> Self {
        Self
    }
}

impl LowerBound for RowMinBound {
    fn lower_bound(&self, matrix: &CoverMatrix) -> Cost {
        matrix
            .rows()
            .filter_map(|r| matrix.min_cost(r))
            .max()
            .unwrap_or(0)
    }
}
