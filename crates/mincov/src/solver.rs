//! Problem builder and solver entry points.

use std::io;
use std::path::Path;

use mincov_config::{HeuristicType, SolverConfig};
use mincov_core::{Cost, CoverMatrix, MinCovError, Result, Solution};
use mincov_solver::{BoundBuilder, BranchAndBound, ExactOutcome, Greedy, RandomTrials, SelectorBuilder};
use tracing::warn;

#[cfg(test)]
mod tests;

/// Weighted minimum set cover problem and its solvers.
///
/// Size the problem with [`set_size`](Self::set_size), declare which
/// columns cover which rows with [`insert_elem`](Self::insert_elem), then
/// call [`exact`](Self::exact) or [`heuristic`](Self::heuristic). The
/// instance is kept between solves, so costs and flags can change and the
/// same instance can be solved again.
#[derive(Debug, Clone, Default)]
pub struct MinCov {
    config: SolverConfig,
    matrix: Option<CoverMatrix>,
}

impl MinCov {
    /// Creates an unsized problem with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unsized problem with the given configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            matrix: None,
        }
    }

    /// Creates an unsized problem configured from a TOML file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = SolverConfig::load(path).map_err(|e| MinCovError::Config(e.to_string()))?;
        Ok(Self::with_config(config))
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SolverConfig {
        &mut self.config
    }

    /// Starts a new empty instance; every column costs 1.
    pub fn set_size(&mut self, row_size: usize, col_size: usize) {
        self.matrix = Some(CoverMatrix::with_unit_costs(row_size, col_size));
    }

    /// Number of rows, or 0 before [`set_size`](Self::set_size).
    pub fn row_size(&self) -> usize {
        self.matrix.as_ref().map_or(0, CoverMatrix::row_size)
    }

    /// Number of columns, or 0 before [`set_size`](Self::set_size).
    pub fn col_size(&self) -> usize {
        self.matrix.as_ref().map_or(0, CoverMatrix::col_size)
    }

    /// Sets the cost of a column. Costs must be positive, and all column
    /// costs together must fit a [`Cost`].
    pub fn set_col_cost(&mut self, col: usize, cost: Cost) -> Result<()> {
        self.matrix_mut()?.set_col_cost(col, cost)
    }

    /// Declares that `col` covers `row`. Repeated insertions are ignored.
    pub fn insert_elem(&mut self, row: usize, col: usize) -> Result<()> {
        self.matrix_mut()?.insert_elem(row, col).map(|_| ())
    }

    /// Enables or disables block partitioning in the exact search.
    pub fn set_partition_flag(&mut self, flag: bool) {
        self.config.partition = flag;
    }

    /// Enables or disables per-depth branching events.
    pub fn set_debug_flag(&mut self, flag: bool) {
        self.config.debug = flag;
    }

    /// Sets the deepest level reported by branching events. Level 0 is the
    /// root and the bound is inclusive.
    pub fn set_max_depth(&mut self, depth: usize) {
        self.config.max_depth = depth;
    }

    /// Finds a minimum cost cover.
    ///
    /// # Errors
    ///
    /// [`MinCovError::NotSized`] before [`set_size`](Self::set_size),
    /// [`MinCovError::UncoverableRow`] when some row has no column.
    pub fn exact(&self) -> Result<Solution> {
        let outcome = self.exact_with_stats()?;
        let Some(solution) = outcome.solution else {
            panic!("exact search found no cover for a feasible instance");
        };
        Ok(solution)
    }

    /// Like [`exact`](Self::exact), also returning search statistics.
    pub fn exact_with_stats(&self) -> Result<ExactOutcome> {
        let matrix = self.feasible_matrix()?;
        let bound = BoundBuilder::build(&self.config.lower_bound);
        let selector = SelectorBuilder::build(self.config.selector);
        let outcome =
            BranchAndBound::new(&self.config, bound.as_ref(), selector.as_ref()).solve(matrix);
        if let Some(solution) = &outcome.solution {
            assert!(
                matrix.verify(solution.columns()),
                "exact cover {solution} misses a row"
            );
        }
        Ok(outcome)
    }

    /// Finds a cover with the named heuristic: `"greedy"` or `"random"`.
    ///
    /// Unknown names fall back to greedy.
    pub fn heuristic(&self, algorithm: &str) -> Result<Solution> {
        let heuristic = HeuristicType::from_name(algorithm).unwrap_or_else(|| {
            warn!(
                event = "unknown_heuristic",
                name = algorithm,
                "unknown heuristic, using greedy"
            );
            HeuristicType::Greedy
        });
        self.run_heuristic(heuristic)
    }

    /// Finds a cover with the configured default heuristic.
    pub fn heuristic_default(&self) -> Result<Solution> {
        self.run_heuristic(self.config.heuristic)
    }

    /// Writes the active rows of the instance and the column costs.
    pub fn print_matrix(&self, out: &mut impl io::Write) -> io::Result<()> {
        match &self.matrix {
            Some(matrix) => write!(out, "{matrix}"),
            None => writeln!(out, "(no matrix)"),
        }
    }

    fn run_heuristic(&self, heuristic: HeuristicType) -> Result<Solution> {
        let matrix = self.feasible_matrix()?;
        let solution = match heuristic {
            HeuristicType::Greedy => {
                let selector = SelectorBuilder::build(self.config.selector);
                Greedy::new(selector.as_ref()).solve(matrix)
            }
            HeuristicType::Random => RandomTrials::new(self.config.random_trials.max(1))
                .with_seed(self.config.effective_seed())
                .with_parallel(self.config.parallel_trials)
                .solve(matrix),
        };
        let Some(solution) = solution else {
            panic!("{heuristic} heuristic found no cover for a feasible instance");
        };
        assert!(
            matrix.verify(solution.columns()),
            "{heuristic} cover {solution} misses a row"
        );
        Ok(solution)
    }

    fn matrix_mut(&mut self) -> Result<&mut CoverMatrix> {
        self.matrix.as_mut().ok_or(MinCovError::NotSized)
    }

    /// The instance, once every row has at least one column.
    fn feasible_matrix(&self) -> Result<&CoverMatrix> {
        let matrix = self.matrix.as_ref().ok_or(MinCovError::NotSized)?;
        match matrix.uncovered_row() {
            Some(row) => Err(MinCovError::UncoverableRow(row)),
            None => Ok(matrix),
        }
    }
}
