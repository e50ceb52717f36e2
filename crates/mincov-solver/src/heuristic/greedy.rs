use mincov_core::{CoverMatrix, Solution};
use tracing::{debug, info};

use super::reduced_copy;
use crate::selector::ColumnSelector;

/// Repeatedly selects the selector's column and reduces.
///
/// Deterministic for a given selector.
#[derive(Debug, Clone, Copy)]
pub struct Greedy<'a> {
    selector: &'a dyn ColumnSelector,
}

impl<'a> Greedy<'a> {
    pub fn new(selector: &'a dyn ColumnSelector) -> Self {
        Self { selector }
    }

    /// Covers the active rows of `matrix`, or returns `None` when a row
    /// cannot be covered.
    pub fn solve(&self, matrix: &CoverMatrix) -> Option<Solution> {
        info!(
            event = "solve_start",
            heuristic = "greedy",
            rows = matrix.row_num(),
            cols = matrix.col_num(),
        );
        let (mut work, mut columns) = reduced_copy(matrix);
        while work.row_num() > 0 {
            let col = self.selector.select(&work)?;
            debug!(event = "greedy_select", col, cost = work.col_cost(col));
            work.select_col(col);
            columns.push(col);
            work.reduce(&mut columns);
        }
        let cost = matrix.cost(&columns);
        info!(event = "solve_end", heuristic = "greedy", cost, columns = columns.len());
        Some(Solution::new(columns, cost))
    }
}
