//! Independent-set bounds over the row conflict graph.
//!
//! Rows in an independent set share no column, so each needs its own
//! column and the sum of their cheapest columns is admissible.

use mincov_core::{Cost, CoverMatrix};

use super::LowerBound;
use crate::graph::ConflictGraph;

/// Independent set chosen by minimum remaining degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndependentSetBound;

impl IndependentSetBound {
    pub fn new() -> Self {
        Self
    }
}

impl LowerBound for IndependentSetBound {
    fn lower_bound(&self, matrix: &CoverMatrix) -> Cost {
        if matrix.row_num() == 0 {
            return 0;
        }
        let (graph, _) = ConflictGraph::from_matrix(matrix);
        graph.min_degree_set().1
    }
}

/// Best of the min-degree set and a weight-aware set.
///
/// The weight-aware set prefers rows whose cheapest column is expensive
/// relative to how many other rows they block.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedIndependentSetBound;

impl WeightedIndependentSetBound {
    pub fn new() -> Self {
        Self
    }
}

impl LowerBound for WeightedIndependentSetBound {
    fn lower_bound(&self, matrix: &CoverMatrix) -> Cost {
        if matrix.row_num() == 0 {
            return 0;
        }
        let (graph, _) = ConflictGraph::from_matrix(matrix);
        graph.min_degree_set().1.max(graph.weighted_set().1)
    }
}
