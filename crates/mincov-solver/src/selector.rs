//! Branching column selectors.
//!
//! A selector only steers search order and heuristic quality; any active
//! column it returns leads to a correct search.

use std::fmt::Debug;

use mincov_core::CoverMatrix;

/// Picks the next column to branch on.
pub trait ColumnSelector: Send + Sync + Debug {
    /// Returns an active column covering at least one active row, or `None`
    /// when no active row has a column.
    fn select(&self, matrix: &CoverMatrix) -> Option<usize>;
}

/// Cheapest column of the most constrained row.
///
/// The row with the fewest columns wins (lowest index on ties). Among its
/// cheapest columns the one covering the most rows wins, then the lowest
/// index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSelector;

impl SimpleSelector {
    pub fn new() -> Self {
        Self
    }
}

impl ColumnSelector for SimpleSelector {
    fn select(&self, matrix: &CoverMatrix) -> Option<usize> {
        let row = matrix
            .rows()
            .filter(|&r| matrix.row_count(r) > 0)
            .min_by_key(|&r| matrix.row_count(r))?;
        matrix.row_cols(row).min_by(|&a, &b| {
            matrix
                .col_cost(a)
                .cmp(&matrix.col_cost(b))
                .then_with(|| matrix.col_count(b).cmp(&matrix.col_count(a)))
                .then_with(|| a.cmp(&b))
        })
    }
}

/// Best scarcity-weighted coverage per unit cost.
///
/// A column scores `sum(1 / row_count(r)) / cost` over the rows it covers,
/// so rows with few alternatives weigh more. Highest score wins, lowest
/// index on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostSensitiveSelector;

impl CostSensitiveSelector {
    pub fn new() -> Self {
        Self
    }

    fn score(matrix: &CoverMatrix, col: usize) -> f64 {
        let weight: f64 = matrix
            .col_rows(col)
            .map(|r| 1.0 / matrix.row_count(r) as f64)
            .sum();
        weight / f64::from(matrix.col_cost(col))
    }
}

impl ColumnSelector for CostSensitiveSelector {
    fn select(&self, matrix: &CoverMatrix) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for col in matrix.cols().filter(|&c| matrix.col_count(c) > 0) {
            let score = Self::score(matrix, col);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((col, score));
            }
        }
        best.map(|(col, _)| col)
    }
}
