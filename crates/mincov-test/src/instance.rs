//! Set cover instances for tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A weighted set cover instance as plain data.
///
/// `rows[r]` lists the columns covering row `r`, sorted and without
/// duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub row_size: usize,
    pub col_size: usize,
    pub costs: Vec<u32>,
    pub rows: Vec<Vec<usize>>,
}

impl Instance {
    /// Creates an instance with no elements and unit costs.
    pub fn new(row_size: usize, col_size: usize) -> Self {
        Self {
            row_size,
            col_size,
            costs: vec![1; col_size],
            rows: vec![Vec::new(); row_size],
        }
    }

    /// Creates an instance from explicit costs and column row-sets.
    ///
    /// `columns[c]` lists the rows covered by column `c`.
    pub fn from_columns(row_size: usize, costs: Vec<u32>, columns: &[&[usize]]) -> Self {
        assert_eq!(costs.len(), columns.len());
        let mut inst = Self {
            row_size,
            col_size: costs.len(),
            costs,
            rows: vec![Vec::new(); row_size],
        };
        for (c, rows) in columns.iter().enumerate() {
            for &r in rows.iter() {
                inst.cover(r, c);
            }
        }
        inst
    }

    /// Declares that `col` covers `row`.
    pub fn cover(&mut self, row: usize, col: usize) {
        let list = &mut self.rows[row];
        if let Err(pos) = list.binary_search(&col) {
            list.insert(pos, col);
        }
    }

    /// Iterates over all `(row, col)` elements in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, cols)| cols.iter().map(move |&c| (r, c)))
    }

    /// Returns true if the listed columns cover every row.
    pub fn covers(&self, cols: &[usize]) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().any(|c| cols.contains(c)))
    }

    /// Sums the costs of the listed columns.
    pub fn cost(&self, cols: &[usize]) -> u32 {
        cols.iter().map(|&c| self.costs[c]).sum()
    }

    /// Places `other` next to `self`: rows and columns of `other` are
    /// renumbered after those of `self`, so the two never interact.
    pub fn concat(&self, other: &Instance) -> Instance {
        let mut inst = Instance::new(
            self.row_size + other.row_size,
            self.col_size + other.col_size,
        );
        inst.costs = self.costs.iter().chain(&other.costs).copied().collect();
        for (r, c) in self.elements() {
            inst.cover(r, c);
        }
        for (r, c) in other.elements() {
            inst.cover(self.row_size + r, self.col_size + c);
        }
        inst
    }

    /// Three rows, three unit columns, each column covering two rows.
    /// Any two columns cover everything; the optimum is 2.
    pub fn triangle() -> Instance {
        Instance::from_columns(3, vec![1, 1, 1], &[&[0, 1], &[1, 2], &[0, 2]])
    }

    /// Row 0 is covered only by column 0 (cost 5); the rest is a triangle
    /// on columns 1..=3. The optimum is 5 + 2.
    pub fn forced_column() -> Instance {
        Instance::from_columns(
            4,
            vec![5, 1, 1, 1],
            &[&[0], &[1, 2], &[2, 3], &[1, 3]],
        )
    }
}

/// Generates a random instance where every row has at least one column.
///
/// Each element is present with probability `density`; costs are uniform in
/// `1..=max_cost`. The same seed always yields the same instance.
pub fn random_instance(
    seed: u64,
    row_size: usize,
    col_size: usize,
    density: f64,
    max_cost: u32,
) -> Instance {
    assert!(col_size > 0 && max_cost > 0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut inst = Instance::new(row_size, col_size);
    for c in 0..col_size {
        inst.costs[c] = rng.random_range(1..=max_cost);
    }
    for r in 0..row_size {
        for c in 0..col_size {
            if rng.random_bool(density) {
                inst.cover(r, c);
            }
        }
        if inst.rows[r].is_empty() {
            let c = rng.random_range(0..col_size);
            inst.cover(r, c);
        }
    }
    inst
}
