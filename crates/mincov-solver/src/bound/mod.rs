//! Lower bounds for branch-and-bound pruning.
//!
//! A bound estimates the cost still needed to cover the active rows of a
//! matrix. Every bound here is admissible: it never exceeds the optimal
//! cost of covering the rows that remain. The search prunes a node when
//! the cost so far plus the bound reaches the incumbent.

mod independent_set;
mod max;
mod row_min;


use std::fmt::Debug;

use mincov_core::{Cost, CoverMatrix};

pub use independent_set::{IndependentSetBound, WeightedIndependentSetBound};
pub use max::MaxBound;
pub use row_min::RowMinBound;

/// Estimates the remaining cover cost of a matrix.
pub trait LowerBound: Send + Sync + Debug {
    /// Returns an admissible estimate for the active rows of `matrix`.
    ///
    /// Must not mutate observable state; the matrix is read only.
    fn lower_bound(&self, matrix: &CoverMatrix) -> Cost;
}
