//! Exact branch-and-bound search.
//!
//! Every node reduces the matrix, bounds the remaining cost and either
//! prunes, splits into independent blocks, or branches on one column:
//! first with the column selected, then with it removed. All matrix
//! changes happen inside checkpoints and are undone on the way back up, so
//! a single working matrix serves the whole tree.
//!
//! Logging levels:
//! - **INFO**: Search start/end with problem size, cost and node count
//! - **DEBUG**: Branching decisions up to `max_depth` (when `debug` is set),
//!   block partitions, incumbent improvements

#[cfg(test)]
mod tests;

use mincov_config::SolverConfig;
use mincov_core::{Block, Cost, CoverMatrix, Solution};
use tracing::{debug, info};

use crate::bound::LowerBound;
use crate::selector::ColumnSelector;
use crate::stats::SolveStats;

/// Result of an exact search.
#[derive(Debug, Clone)]
pub struct ExactOutcome {
    /// Optimal cover, or `None` when some row cannot be covered.
    pub solution: Option<Solution>,
    pub stats: SolveStats,
}

/// Exact minimum cover search.
///
/// # Example
///
/// ```
/// use mincov_config::SolverConfig;
/// use mincov_core::CoverMatrix;
/// use mincov_solver::{BranchAndBound, IndependentSetBound, SimpleSelector};
///
/// let mut matrix = CoverMatrix::with_unit_costs(3, 3);
/// for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 1), (0, 2), (2, 2)] {
///     matrix.insert_elem(r, c).unwrap();
/// }
///
/// let config = SolverConfig::default();
/// let bound = IndependentSetBound::new();
/// let selector = SimpleSelector::new();
/// let outcome = BranchAndBound::new(&config, &bound, &selector).solve(&matrix);
///
/// assert_eq!(outcome.solution.unwrap().cost(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BranchAndBound<'a> {
    config: &'a SolverConfig,
    bound: &'a dyn LowerBound,
    selector: &'a dyn ColumnSelector,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(
        config: &'a SolverConfig,
        bound: &'a dyn LowerBound,
        selector: &'a dyn ColumnSelector,
    ) -> Self {
        Self {
            config,
            bound,
            selector,
        }
    }

    /// Finds a minimum cost cover of the active rows of `matrix`.
    ///
    /// `matrix` itself is left untouched; the search runs on a copy.
    pub fn solve(&self, matrix: &CoverMatrix) -> ExactOutcome {
        info!(
            event = "solve_start",
            rows = matrix.row_num(),
            cols = matrix.col_num(),
            cells = matrix.cell_count(),
            partition = self.config.partition,
        );

        let mut search = Search::new(*self, matrix, None, 0);
        search.stats.start();
        search.solve(0, 0);
        search.stats.finish();

        let Search { best, stats, .. } = search;
        let solution = best.map(|(columns, cost)| Solution::new(columns, cost));

        info!(
            event = "solve_end",
            cost = solution.as_ref().map(Solution::cost),
            nodes = stats.nodes,
            pruned = stats.pruned,
            partitions = stats.partitions,
            improvements = stats.improvements,
            deepest = stats.deepest,
            duration_ms = stats.elapsed().as_millis() as u64,
        );
        ExactOutcome { solution, stats }
    }
}

/// Mutable state of one search tree.
struct Search<'a> {
    solver: BranchAndBound<'a>,
    /// Matrix the search started from, used to verify incumbents.
    original: &'a CoverMatrix,
    matrix: CoverMatrix,
    current: Vec<usize>,
    current_cost: Cost,
    /// Best cover found and its cost. Starts as `None`, or with an empty
    /// column list when the caller only wants covers below a limit.
    best: Option<(Vec<usize>, Cost)>,
    /// Whether this tree replaced `best` with a cover of its own.
    improved: bool,
    stats: SolveStats,
    /// Depth of this tree's root inside the enclosing search.
    depth_offset: usize,
}

impl<'a> Search<'a> {
    fn new(
        solver: BranchAndBound<'a>,
        original: &'a CoverMatrix,
        limit: Option<Cost>,
        depth_offset: usize,
    ) -> Self {
        Self {
            solver,
            original,
            matrix: original.clone(),
            current: Vec::new(),
            current_cost: 0,
            best: limit.map(|cost| (Vec::new(), cost)),
            improved: false,
            stats: SolveStats::default(),
            depth_offset,
        }
    }

    fn best_cost(&self) -> Option<Cost> {
        self.best.as_ref().map(|(_, cost)| *cost)
    }

    fn debug_enabled(&self, depth: usize) -> bool {
        let config = self.solver.config;
        config.debug && depth + self.depth_offset <= config.max_depth
    }

    /// One search node. `inherited` is an admissible bound for the matrix
    /// as it stands before this node's reductions.
    fn solve(&mut self, inherited: Cost, depth: usize) {
        self.stats.record_node(depth);
        let mark = self.current.len();
        let mark_cost = self.current_cost;
        let checkpoints = self.matrix.checkpoint_depth();

        self.matrix.save();
        self.matrix.reduce(&mut self.current);
        self.current_cost += self.matrix.cost(&self.current[mark..]);
        let forced = self.current_cost - mark_cost;

        self.explore(inherited.saturating_sub(forced), depth);

        self.current.truncate(mark);
        self.current_cost = mark_cost;
        self.matrix.restore();

        if self.solver.config.environment_mode.is_fully_asserted() {
            assert_eq!(
                self.matrix.checkpoint_depth(),
                checkpoints,
                "unbalanced checkpoints at depth {depth}"
            );
        }
    }

    fn explore(&mut self, inherited: Cost, depth: usize) {
        if self.solver.config.environment_mode.is_fully_asserted() {
            assert!(
                self.matrix.check_consistency(),
                "matrix counters out of sync at depth {depth}"
            );
        }

        if self.matrix.row_num() == 0 {
            self.record_incumbent(depth);
            return;
        }
        if self.matrix.uncovered_row().is_some() {
            self.stats.record_infeasible();
            return;
        }

        let lb = self.solver.bound.lower_bound(&self.matrix).max(inherited);
        if let Some(best) = self.best_cost() {
            if self.current_cost + lb >= best {
                self.stats.record_pruned();
                return;
            }
        }

        if self.solver.config.partition {
            if let Some((first, second)) = self.matrix.block_partition() {
                self.solve_blocks(&first, &second, depth);
                return;
            }
        }

        let Some(col) = self.solver.selector.select(&self.matrix) else {
            self.stats.record_infeasible();
            return;
        };
        let cost = self.matrix.col_cost(col);
        if self.debug_enabled(depth) {
            debug!(
                event = "branch",
                depth = depth + self.depth_offset,
                col,
                cost,
                lb,
                current_cost = self.current_cost,
                best = self.best_cost(),
                rows = self.matrix.row_num(),
                cols = self.matrix.col_num(),
            );
        }

        self.matrix.save();
        self.matrix.select_col(col);
        self.current.push(col);
        self.current_cost += cost;
        self.solve(lb.saturating_sub(cost), depth + 1);
        self.current_cost -= cost;
        self.current.pop();
        self.matrix.restore();

        self.matrix.save();
        self.matrix.delete_col(col);
        self.solve(lb, depth + 1);
        self.matrix.restore();
    }

    /// Solves two independent blocks one after the other and combines them
    /// when together they beat the incumbent.
    fn solve_blocks(&mut self, first: &Block, second: &Block, depth: usize) {
        self.stats.record_partition();
        debug!(
            event = "partition",
            depth = depth + self.depth_offset,
            first_rows = first.rows.len(),
            first_cols = first.cols.len(),
            second_rows = second.rows.len(),
            second_cols = second.cols.len(),
        );

        let budget = self.best_cost().map(|best| best - self.current_cost);
        let Some((first_cols, first_cost)) = self.solve_block(first, budget, depth) else {
            return;
        };
        let budget = budget.map(|b| b - first_cost);
        let Some((second_cols, second_cost)) = self.solve_block(second, budget, depth) else {
            return;
        };

        let mark = self.current.len();
        let mark_cost = self.current_cost;
        self.current.extend(first_cols);
        self.current.extend(second_cols);
        self.current_cost += first_cost + second_cost;
        self.record_incumbent(depth);
        self.current.truncate(mark);
        self.current_cost = mark_cost;
    }

    /// Optimal cover of one block, if one costs less than `limit`.
    fn solve_block(
        &mut self,
        block: &Block,
        limit: Option<Cost>,
        depth: usize,
    ) -> Option<(Vec<usize>, Cost)> {
        let sub_matrix = self.matrix.restricted(&block.rows, &block.cols);
        let mut sub = Search::new(self.solver, &sub_matrix, limit, self.depth_offset + depth + 1);
        sub.solve(0, 0);
        self.stats.absorb(&sub.stats, self.depth_offset + depth + 1);
        // Without an improvement `best` still holds the limit itself.
        if !sub.improved {
            return None;
        }
        sub.best
    }

    fn record_incumbent(&mut self, depth: usize) {
        if self
            .best_cost()
            .is_some_and(|best| self.current_cost >= best)
        {
            return;
        }
        if self.solver.config.environment_mode.is_asserted() {
            assert!(
                self.original.verify(&self.current),
                "incumbent {:?} does not cover the matrix",
                self.current
            );
        }
        if self.debug_enabled(depth) {
            debug!(
                event = "incumbent",
                depth = depth + self.depth_offset,
                cost = self.current_cost,
                columns = self.current.len(),
            );
        }
        self.stats.record_improvement();
        self.improved = true;
        self.best = Some((self.current.clone(), self.current_cost));
    }
}
