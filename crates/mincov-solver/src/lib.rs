//! mincov solver engine
//!
//! This crate provides the solvers built on [`mincov_core::CoverMatrix`]:
//! - Lower bounds (per-row minimum, independent sets, composite maximum)
//! - Column selectors for branching
//! - Exact branch-and-bound search with block partitioning
//! - Greedy and randomized heuristics
//! - Configuration wiring (builder module)

pub mod bound;
pub mod builder;
pub mod exact;
pub mod graph;
pub mod heuristic;
pub mod selector;
pub mod stats;

#[cfg(test)]
mod test_util;

pub use bound::{
    IndependentSetBound, LowerBound, MaxBound, RowMinBound, WeightedIndependentSetBound,
};
pub use builder::{BoundBuilder, SelectorBuilder};
pub use exact::{BranchAndBound, ExactOutcome};
pub use graph::ConflictGraph;
pub use heuristic::{Greedy, RandomTrials};
pub use selector::{ColumnSelector, CostSensitiveSelector, SimpleSelector};
pub use stats::SolveStats;
