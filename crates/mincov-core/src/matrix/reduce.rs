//! Reduction rules: row dominance, column dominance and essential columns.
//!
//! None of the rules changes the optimal cost. Columns forced by
//! `essential_col` are appended to the caller's solution.

use tracing::trace;

use super::CoverMatrix;

impl CoverMatrix {
    /// Applies all reduction rules until none fires.
    ///
    /// Columns selected along the way are appended to `selected`.
    pub fn reduce(&mut self, selected: &mut Vec<usize>) {
        loop {
            let mut changed = false;
            if self.row_dominance() {
                changed = true;
            }
            if self.col_dominance() {
                changed = true;
            }
            if self.essential_col(selected) {
                changed = true;
            }
            if !changed {
                break;
            }
        }
    }

    /// Deletes every row whose column set contains another row's column set.
    ///
    /// Of two rows with identical column sets the later one is deleted.
    /// Returns true if a row was deleted.
    pub fn row_dominance(&mut self) -> bool {
        let mut dominated = vec![false; self.row_size()];
        let mut victims = Vec::new();
        let rows: Vec<usize> = self.rows().collect();
        for &a in &rows {
            if dominated[a] || self.rows[a].num == 0 {
                continue;
            }
            let na = self.rows[a].num;
            // Every superset of `a` goes through a's sparsest column.
            let Some(pivot) = self.row_cols(a).min_by_key(|&c| self.cols[c].num) else {
                continue;
            };
            for b in self.col_rows(pivot) {
                if b == a || dominated[b] || self.rows[b].num < na {
                    continue;
                }
                if self.row_subset(a, b) {
                    dominated[b] = true;
                    victims.push(b);
                }
            }
        }
        if victims.is_empty() {
            return false;
        }

        let mut touched = Vec::new();
        for &r in &victims {
            touched.extend(self.row_cols(r));
            self.delete_row(r);
        }
        for c in touched {
            if self.cols[c].active && self.cols[c].num == 0 {
                self.delete_col(c);
            }
        }
        trace!(event = "row_dominance", rows_deleted = victims.len());
        true
    }

    /// Deletes every column whose row set is contained in a no more
    /// expensive column's row set, as well as columns covering no row.
    ///
    /// Returns true if a column was deleted.
    pub fn col_dominance(&mut self) -> bool {
        let mut dominated = vec![false; self.col_size()];
        let mut victims = Vec::new();
        let cols: Vec<usize> = self.cols().collect();
        for &x in &cols {
            if dominated[x] {
                continue;
            }
            let nx = self.cols[x].num;
            let Some(pivot) = self.col_rows(x).min_by_key(|&r| self.rows[r].num) else {
                dominated[x] = true;
                victims.push(x);
                continue;
            };
            let cost_x = self.costs[x];
            let found = self.row_cols(pivot).any(|y| {
                y != x
                    && !dominated[y]
                    && self.cols[y].num >= nx
                    && self.costs[y] <= cost_x
                    && self.col_subset(x, y)
            });
            if found {
                dominated[x] = true;
                victims.push(x);
            }
        }
        if victims.is_empty() {
            return false;
        }
        for &c in &victims {
            self.delete_col(c);
        }
        trace!(event = "col_dominance", cols_deleted = victims.len());
        true
    }

    /// Selects every column that is the only cover of some row.
    ///
    /// Selected columns are appended to `selected`. Returns true if a column
    /// was selected.
    pub fn essential_col(&mut self, selected: &mut Vec<usize>) -> bool {
        let mut marked = vec![false; self.col_size()];
        let mut essentials = Vec::new();
        for r in self.rows() {
            if self.rows[r].num != 1 {
                continue;
            }
            if let Some(c) = self.row_cols(r).next() {
                if !marked[c] {
                    marked[c] = true;
                    essentials.push(c);
                }
            }
        }
        if essentials.is_empty() {
            return false;
        }
        for &c in &essentials {
            if self.cols[c].active {
                self.select_col(c);
                selected.push(c);
            }
        }
        trace!(event = "essential_col", cols_selected = essentials.len());
        true
    }

    /// Returns true if every column of row `a` also covers row `b`.
    fn row_subset(&self, a: usize, b: usize) -> bool {
        let mut big = self.row_cols(b);
        'outer: for c in self.row_cols(a) {
            for d in big.by_ref() {
                if d == c {
                    continue 'outer;
                }
                if d > c {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// Returns true if every row of column `x` is also covered by column `y`.
    fn col_subset(&self, x: usize, y: usize) -> bool {
        let mut big = self.col_rows(y);
        'outer: for r in self.col_rows(x) {
            for s in big.by_ref() {
                if s == r {
                    continue 'outer;
                }
                if s > r {
                    return false;
                }
            }
            return false;
        }
        true
    }
}
