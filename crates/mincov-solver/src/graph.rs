//! Weighted conflict graph and greedy independent sets.
//!
//! Nodes are opaque ids `0..len` with a cost each. An independent set in
//! the graph is a clique in its complement; both heuristics here return a
//! maximal independent set, not a maximum one.

use mincov_core::{Cost, CoverMatrix};
use smallvec::SmallVec;

type Neighbours = SmallVec<[usize; 8]>;

/// Undirected graph with per-node costs.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    costs: Vec<Cost>,
    adj: Vec<Neighbours>,
}

impl ConflictGraph {
    /// Creates a graph of `len` isolated nodes with cost 0.
    pub fn new(len: usize) -> Self {
        Self {
            costs: vec![0; len],
            adj: vec![Neighbours::new(); len],
        }
    }

    /// Builds the conflict graph of the active rows of `matrix`.
    ///
    /// Node `i` is the `i`-th active row, weighted by its cheapest column.
    /// Two rows are adjacent when some active column covers both. Returns
    /// the graph and the row index of every node.
    pub fn from_matrix(matrix: &CoverMatrix) -> (Self, Vec<usize>) {
        let rows: Vec<usize> = matrix.rows().collect();
        let mut node_of = vec![usize::MAX; matrix.row_size()];
        for (id, &r) in rows.iter().enumerate() {
            node_of[r] = id;
        }

        let mut graph = Self::new(rows.len());
        // stamp[s] == id + 1 once row s is known adjacent to node id.
        let mut stamp = vec![0usize; matrix.row_size()];
        for (id, &r) in rows.iter().enumerate() {
            graph.costs[id] = matrix.min_cost(r).unwrap_or(0);
            stamp[r] = id + 1;
            for c in matrix.row_cols(r) {
                for s in matrix.col_rows(c) {
                    if stamp[s] != id + 1 {
                        stamp[s] = id + 1;
                        graph.adj[id].push(node_of[s]);
                    }
                }
            }
        }
        (graph, rows)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn set_cost(&mut self, node: usize, cost: Cost) {
        self.costs[node] = cost;
    }

    pub fn cost(&self, node: usize) -> Cost {
        self.costs[node]
    }

    /// Adds an edge. Self loops and repeated edges are ignored.
    pub fn connect(&mut self, a: usize, b: usize) {
        if a == b || self.adj[a].contains(&b) {
            return;
        }
        self.adj[a].push(b);
        self.adj[b].push(a);
    }

    pub fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    pub fn neighbours(&self, node: usize) -> &[usize] {
        &self.adj[node]
    }

    /// Greedy independent set by minimum remaining degree.
    ///
    /// Repeatedly takes the live node with the fewest live neighbours
    /// (lowest id on ties), then removes it and its neighbours, updating the
    /// degrees of the nodes left behind. Returns the chosen nodes and their
    /// total cost.
    pub fn min_degree_set(&self) -> (Vec<usize>, Cost) {
        self.greedy_set(|_, best, cand, degree| degree[cand] < degree[best])
    }

    /// Greedy independent set favouring heavy nodes.
    ///
    /// Repeatedly takes the live node maximising
    /// `cost / (live_degree + 1)` (lowest id on ties).
    pub fn weighted_set(&self) -> (Vec<usize>, Cost) {
        self.greedy_set(|graph, best, cand, degree| {
            // cost[cand] / (d[cand] + 1) > cost[best] / (d[best] + 1)
            let lhs = u64::from(graph.costs[cand]) * (degree[best] as u64 + 1);
            let rhs = u64::from(graph.costs[best]) * (degree[cand] as u64 + 1);
            lhs > rhs
        })
    }

    /// Shared driver: `better(graph, best, cand, degree)` says whether `cand`
    /// beats the current pick.
    fn greedy_set<F>(&self, better: F) -> (Vec<usize>, Cost)
    where
        F: Fn(&Self, usize, usize, &[usize]) -> bool,
    {
        let n = self.len();
        let mut live = vec![true; n];
        let mut degree: Vec<usize> = self.adj.iter().map(|a| a.len()).collect();
        let mut chosen = Vec::new();
        let mut total: Cost = 0;

        loop {
            let mut pick: Option<usize> = None;
            for v in (0..n).filter(|&v| live[v]) {
                pick = match pick {
                    Some(best) if !better(self, best, v, &degree[..]) => Some(best),
                    _ => Some(v),
                };
            }
            let Some(v) = pick else {
                break;
            };
            chosen.push(v);
            total += self.costs[v];

            live[v] = false;
            for &u in &self.adj[v] {
                if !live[u] {
                    continue;
                }
                live[u] = false;
                for &w in &self.adj[u] {
                    if live[w] {
                        degree[w] -= 1;
                    }
                }
            }
        }
        (chosen, total)
    }
}
