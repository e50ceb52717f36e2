use mincov_core::{Cost, CoverMatrix, Solution};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use super::reduced_copy;

/// Randomized multi-start.
///
/// Each trial repeatedly takes the first active row, selects a uniformly
/// random column covering it and reduces, until every row is covered. The
/// cheapest trial wins; among equal costs the earliest trial wins, also
/// when trials run in parallel.
#[derive(Debug, Clone, Copy)]
pub struct RandomTrials {
    trials: usize,
    seed: Option<u64>,
    parallel: bool,
}

/// Outcome of one trial: cost, trial index, chosen columns.
type Trial = (Cost, usize, Vec<usize>);

impl RandomTrials {
    /// Creates a multi-start with `trials` trials and fresh entropy.
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            seed: None,
            parallel: false,
        }
    }

    /// Fixes the base seed; trial `t` is seeded with `seed + t`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Runs trials on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Covers the active rows of `matrix`, or returns `None` when a row
    /// cannot be covered or no trial is configured.
    pub fn solve(&self, matrix: &CoverMatrix) -> Option<Solution> {
        let base_seed = self.seed.unwrap_or_else(|| rand::rng().random());
        info!(
            event = "solve_start",
            heuristic = "random",
            rows = matrix.row_num(),
            cols = matrix.col_num(),
            trials = self.trials,
            seed = base_seed,
            parallel = self.parallel,
        );

        let (work, mut columns) = reduced_copy(matrix);
        let base_cost = matrix.cost(&columns);

        let best = if work.row_num() == 0 {
            Some((0, 0, Vec::new()))
        } else if self.parallel {
            (0..self.trials)
                .into_par_iter()
                .filter_map(|t| run_trial(&work, base_seed, t))
                .min_by_key(|(cost, t, _)| (*cost, *t))
        } else {
            let mut best: Option<Trial> = None;
            for t in 0..self.trials {
                let Some(trial) = run_trial(&work, base_seed, t) else {
                    // Every trial hits the same uncoverable row.
                    return None;
                };
                if best.as_ref().map_or(true, |(cost, _, _)| trial.0 < *cost) {
                    debug!(
                        event = "best_so_far",
                        trial = t,
                        cost = trial.0 + base_cost,
                        trial_cost = trial.0,
                        forced_cost = base_cost,
                    );
                    best = Some(trial);
                }
            }
            best
        };

        let (_, trial, picked) = best?;
        columns.extend(picked);
        let cost = matrix.cost(&columns);
        info!(
            event = "solve_end",
            heuristic = "random",
            cost,
            best_trial = trial,
            columns = columns.len(),
        );
        Some(Solution::new(columns, cost))
    }
}

/// Runs trial `t` on a copy of `work`.
fn run_trial(work: &CoverMatrix, base_seed: u64, t: usize) -> Option<Trial> {
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(t as u64));
    let mut matrix = work.clone();
    let mut picked = Vec::new();
    while let Some(row) = matrix.first_row() {
        let n = matrix.row_count(row);
        if n == 0 {
            return None;
        }
        let col = matrix.row_cols(row).nth(rng.random_range(0..n))?;
        matrix.select_col(col);
        picked.push(col);
        matrix.reduce(&mut picked);
    }
    Some((work.cost(&picked), t, picked))
}
