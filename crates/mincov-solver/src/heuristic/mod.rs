//! Approximate covers.
//!
//! Both heuristics work on a private copy of the matrix. No checkpoint is
//! open on that copy, so every deletion is permanent and returns its cells
//! to the pool.

mod greedy;
mod random;

pub use greedy::Greedy;
pub use random::RandomTrials;

use mincov_core::CoverMatrix;

/// Copies `matrix` and applies the reductions once.
///
/// Returns the reduced copy and the columns the reductions forced.
pub(crate) fn reduced_copy(matrix: &CoverMatrix) -> (CoverMatrix, Vec<usize>) {
    let mut work = matrix.clone();
    let mut forced = Vec::new();
    work.reduce(&mut forced);
    (work, forced)
}
