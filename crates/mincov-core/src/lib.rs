//! mincov core - data structures for weighted minimum set cover
//!
//! This crate provides the fundamental pieces the solvers build on:
//! - [`CoverMatrix`]: sparse incidence matrix with checkpoint/restore
//! - Reduction rules (row/column dominance, essential columns)
//! - Block partitioning into independent sub-problems
//! - [`Solution`] and the [`Cost`] type
//! - The error taxonomy

pub mod error;
pub mod matrix;
pub mod solution;

pub use error::{MinCovError, Result};
pub use matrix::{ActiveIter, Block, ColRows, CoverMatrix, RowCols};
pub use solution::{Cost, Solution};
