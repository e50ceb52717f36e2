//! Search statistics.
//!
//! Plain counters filled in by the exact search and the heuristics.

use std::time::{Duration, Instant};

/// Counters for a single solve run.
///
/// # Example
///
/// ```
/// use mincov_solver::stats::SolveStats;
///
/// let mut stats = SolveStats::default();
/// stats.start();
/// stats.record_node(0);
/// stats.record_node(3);
/// stats.record_pruned();
/// stats.finish();
///
/// assert_eq!(stats.nodes, 2);
/// assert_eq!(stats.pruned, 1);
/// assert_eq!(stats.deepest, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    start_time: Option<Instant>,
    finished: Option<Duration>,
    /// Search nodes entered.
    pub nodes: u64,
    /// Nodes cut off by the lower bound.
    pub pruned: u64,
    /// Nodes left with a row no column covers.
    pub infeasible: u64,
    /// Nodes solved as two independent blocks.
    pub partitions: u64,
    /// Times the incumbent improved.
    pub improvements: u64,
    /// Deepest branching level reached.
    pub deepest: usize,
}

impl SolveStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished = Some(self.running_time());
    }

    /// Returns the elapsed time since solving started, or the frozen time
    /// after [`finish`](Self::finish).
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.running_time())
    }

    fn running_time(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records entering a node at `depth`.
    pub fn record_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.deepest = self.deepest.max(depth);
    }

    pub fn record_pruned(&mut self) {
        self.pruned += 1;
    }

    pub fn record_infeasible(&mut self) {
        self.infeasible += 1;
    }

    pub fn record_partition(&mut self) {
        self.partitions += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Adds the counters of a sub-search. Timing is left alone.
    pub fn absorb(&mut self, other: &SolveStats, depth_offset: usize) {
        self.nodes += other.nodes;
        self.pruned += other.pruned;
        self.infeasible += other.infeasible;
        self.partitions += other.partitions;
        self.improvements += other.improvements;
        self.deepest = self.deepest.max(other.deepest + depth_offset);
    }
}
