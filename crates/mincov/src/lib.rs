//! mincov - weighted minimum set cover in Rust
//!
//! Pick the cheapest set of columns so that every row is covered by at
//! least one of them. Exact answers come from a branch-and-bound search
//! with matrix reductions and lower-bound pruning; greedy and randomized
//! heuristics give fast approximate covers.
//!
//! # Example
//!
//! ```rust
//! use mincov::MinCov;
//!
//! let mut mincov = MinCov::new();
//! mincov.set_size(3, 3);
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 1), (0, 2), (2, 2)] {
//!     mincov.insert_elem(row, col).unwrap();
//! }
//!
//! let exact = mincov.exact().unwrap();
//! assert_eq!(exact.cost(), 2);
//!
//! let greedy = mincov.heuristic("greedy").unwrap();
//! assert!(greedy.cost() >= exact.cost());
//! ```

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::MinCov;

pub use mincov_config::{
    ConfigError, EnvironmentMode, HeuristicType, LowerBoundConfig, MaxBoundConfig, SelectorType,
    SolverConfig,
};
pub use mincov_core::{Cost, CoverMatrix, MinCovError, Result, Solution};
pub use mincov_solver::{ExactOutcome, SolveStats};
