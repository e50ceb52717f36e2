//! Sparse cover matrix.
//!
//! Rows are the elements to cover, columns the weighted covering options.
//! Every nonzero entry is a cell linked into both its row list and its
//! column list. Deleting a row unlinks its cells from the column lists (and
//! vice versa) without touching the deleted line's own list, so deletions
//! recorded on the checkpoint trail can be undone by re-splicing in reverse
//! order.
//!
//! Lists are kept sorted by index: cells in a row by column, cells in a
//! column by row, and the active row/column lists by position. Nothing is
//! ever reordered, only unlinked and relinked.

mod cell;
mod line;
mod partition;
mod reduce;
mod trail;


use std::fmt;

use crate::error::{MinCovError, Result};
use crate::solution::Cost;

use cell::{CellId, CellPool};
use line::{ActiveList, LineHead};
use trail::TrailEntry;

pub use line::ActiveIter;
pub use partition::Block;

/// Incremental sparse row/column incidence structure with checkpoint/restore.
#[derive(Debug, Clone)]
pub struct CoverMatrix {
    pool: CellPool,
    rows: Vec<LineHead>,
    cols: Vec<LineHead>,
    row_list: ActiveList,
    col_list: ActiveList,
    costs: Vec<Cost>,
    /// Sum of all column costs, never above `Cost::MAX`.
    total_cost: u64,
    trail: Vec<TrailEntry>,
    markers: usize,
}

impl CoverMatrix {
    /// Creates an empty matrix with every row and column active.
    ///
    /// # Panics
    ///
    /// Panics if `costs.len() != col_size` or the costs add up to more
    /// than `Cost::MAX`.
    pub fn new(row_size: usize, col_size: usize, costs: Vec<Cost>) -> Self {
        assert_eq!(costs.len(), col_size, "one cost per column is required");
        let total_cost: u64 = costs.iter().map(|&c| u64::from(c)).sum();
        assert!(
            total_cost <= u64::from(Cost::MAX),
            "total column cost {total_cost} exceeds {}",
            Cost::MAX
        );
        let mut rows = vec![LineHead::empty(); row_size];
        let mut cols = vec![LineHead::empty(); col_size];
        rows.iter_mut().for_each(|h| h.active = true);
        cols.iter_mut().for_each(|h| h.active = true);
        Self {
            pool: CellPool::new(),
            rows,
            cols,
            row_list: ActiveList::full(row_size),
            col_list: ActiveList::full(col_size),
            costs,
            total_cost,
            trail: Vec::new(),
            markers: 0,
        }
    }

    /// Creates an empty matrix where every column costs 1.
    pub fn with_unit_costs(row_size: usize, col_size: usize) -> Self {
        Self::new(row_size, col_size, vec![1; col_size])
    }

    /// Builds a matrix holding only the listed rows and columns of `self`
    /// and the live cells between them.
    ///
    /// Sizes and costs are kept, so indices stay meaningful in the copy.
    pub fn restricted(&self, rows: &[usize], cols: &[usize]) -> Self {
        let mut sub = Self {
            pool: CellPool::new(),
            rows: vec![LineHead::empty(); self.row_size()],
            cols: vec![LineHead::empty(); self.col_size()],
            row_list: ActiveList::new(self.row_size()),
            col_list: ActiveList::new(self.col_size()),
            costs: self.costs.clone(),
            total_cost: self.total_cost,
            trail: Vec::new(),
            markers: 0,
        };
        for &r in rows {
            sub.rows[r].active = true;
            sub.row_list.push_back(r);
        }
        for &c in cols {
            sub.cols[c].active = true;
            sub.col_list.push_back(c);
        }
        for &r in rows {
            for c in self.row_cols(r) {
                if sub.cols[c].active {
                    sub.link_cell(r, c);
                }
            }
        }
        sub
    }

    /// Returns the number of rows the matrix was sized for.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns the matrix was sized for.
    #[inline]
    pub fn col_size(&self) -> usize {
        self.cols.len()
    }

    /// Returns the number of active rows.
    #[inline]
    pub fn row_num(&self) -> usize {
        self.row_list.len()
    }

    /// Returns the number of active columns.
    #[inline]
    pub fn col_num(&self) -> usize {
        self.col_list.len()
    }

    /// Returns the cost of a column.
    #[inline]
    pub fn col_cost(&self, col: usize) -> Cost {
        self.costs[col]
    }

    /// Returns all column costs, indexed by column.
    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    #[inline]
    pub fn is_row_active(&self, row: usize) -> bool {
        self.rows[row].active
    }

    #[inline]
    pub fn is_col_active(&self, col: usize) -> bool {
        self.cols[col].active
    }

    /// Number of live columns covering `row`.
    #[inline]
    pub fn row_count(&self, row: usize) -> usize {
        self.rows[row].num
    }

    /// Number of live rows covered by `col`.
    #[inline]
    pub fn col_count(&self, col: usize) -> usize {
        self.cols[col].num
    }

    /// Iterates over the active rows in index order.
    pub fn rows(&self) -> ActiveIter<'_> {
        self.row_list.iter()
    }

    /// Iterates over the active columns in index order.
    pub fn cols(&self) -> ActiveIter<'_> {
        self.col_list.iter()
    }

    /// Returns the first active row, if any.
    pub fn first_row(&self) -> Option<usize> {
        self.row_list.first()
    }

    /// Iterates over the live columns covering `row`, in column order.
    pub fn row_cols(&self, row: usize) -> RowCols<'_> {
        RowCols {
            matrix: self,
            cur: self.rows[row].first,
        }
    }

    /// Iterates over the live rows covered by `col`, in row order.
    pub fn col_rows(&self, col: usize) -> ColRows<'_> {
        ColRows {
            matrix: self,
            cur: self.cols[col].first,
        }
    }

    /// Returns the cheapest live column covering `row`, if any.
    pub fn min_cost_col(&self, row: usize) -> Option<usize> {
        self.row_cols(row).min_by_key(|&c| self.costs[c])
    }

    /// Returns the cost of the cheapest live column covering `row`.
    pub fn min_cost(&self, row: usize) -> Option<Cost> {
        self.row_cols(row).map(|c| self.costs[c]).min()
    }

    /// Number of cells currently held by the pool.
    pub fn cell_count(&self) -> usize {
        self.pool.live()
    }

    /// Adds an element: `col` covers `row`.
    ///
    /// Meant for construction, before any deletion. Duplicates are ignored;
    /// returns `Ok(true)` when a new cell was created.
    pub fn insert_elem(&mut self, row: usize, col: usize) -> Result<bool> {
        if row >= self.row_size() {
            return Err(MinCovError::RowOutOfRange {
                row,
                row_size: self.row_size(),
            });
        }
        if col >= self.col_size() {
            return Err(MinCovError::ColOutOfRange {
                col,
                col_size: self.col_size(),
            });
        }
        debug_assert!(self.trail.is_empty(), "insert_elem inside a checkpoint");
        Ok(self.link_cell(row, col))
    }

    /// Changes the cost of a column. Like [`insert_elem`](Self::insert_elem),
    /// only valid between solves.
    ///
    /// The costs of all columns together must stay within `Cost::MAX`, so
    /// that no sum of distinct columns can overflow.
    pub fn set_col_cost(&mut self, col: usize, cost: Cost) -> Result<()> {
        if col >= self.col_size() {
            return Err(MinCovError::ColOutOfRange {
                col,
                col_size: self.col_size(),
            });
        }
        if cost == 0 {
            return Err(MinCovError::InvalidCost { col, cost });
        }
        let total_cost = self.total_cost - u64::from(self.costs[col]) + u64::from(cost);
        if total_cost > u64::from(Cost::MAX) {
            return Err(MinCovError::CostOverflow {
                col,
                cost,
                total: total_cost,
            });
        }
        debug_assert!(self.trail.is_empty(), "set_col_cost inside a checkpoint");
        self.costs[col] = cost;
        self.total_cost = total_cost;
        Ok(())
    }

    /// Selects `col` into the solution: deletes every row it covers, then
    /// every column left without rows (including `col` itself).
    pub fn select_col(&mut self, col: usize) {
        assert!(self.cols[col].active, "column {col} is not active");
        let rows: Vec<usize> = self.col_rows(col).collect();
        let mut touched = Vec::new();
        for r in rows {
            touched.extend(self.row_cols(r));
            self.delete_row(r);
        }
        for c in touched {
            if self.cols[c].active && self.cols[c].num == 0 {
                self.delete_col(c);
            }
        }
        if self.cols[col].active {
            self.delete_col(col);
        }
    }

    /// Removes a row from the active list and its cells from their columns.
    ///
    /// Inside a checkpoint the deletion is recorded for [`restore`](Self::restore);
    /// otherwise it is permanent and the row's cells go back to the pool.
    pub fn delete_row(&mut self, row: usize) {
        assert!(self.rows[row].active, "row {row} deleted twice");
        self.rows[row].active = false;
        self.row_list.unlink(row);
        let mut cur = self.rows[row].first;
        while !cur.is_nil() {
            self.unlink_from_col(cur);
            cur = self.pool.get(cur).row_next;
        }
        if self.markers > 0 {
            self.trail.push(TrailEntry::RowDeleted(row));
        } else {
            self.release_row_cells(row);
        }
    }

    /// Removes a column from the active list and its cells from their rows.
    ///
    /// Same checkpoint semantics as [`delete_row`](Self::delete_row).
    pub fn delete_col(&mut self, col: usize) {
        assert!(self.cols[col].active, "column {col} deleted twice");
        self.cols[col].active = false;
        self.col_list.unlink(col);
        let mut cur = self.cols[col].first;
        while !cur.is_nil() {
            self.unlink_from_row(cur);
            cur = self.pool.get(cur).col_next;
        }
        if self.markers > 0 {
            self.trail.push(TrailEntry::ColDeleted(col));
        } else {
            self.release_col_cells(col);
        }
    }

    /// Returns true if every active row is covered by a column of `solution`.
    ///
    /// Called on the untouched instance, this checks that `solution` covers
    /// every row.
    pub fn verify(&self, solution: &[usize]) -> bool {
        let mut chosen = vec![false; self.col_size()];
        for &c in solution {
            if c >= self.col_size() {
                return false;
            }
            chosen[c] = true;
        }
        self.rows()
            .all(|r| self.row_cols(r).any(|c| chosen[c]))
    }

    /// Sums the costs of the listed columns.
    ///
    /// Cannot overflow for distinct columns: all costs together fit a `Cost`.
    pub fn cost(&self, solution: &[usize]) -> Cost {
        solution.iter().map(|&c| self.costs[c]).sum()
    }

    /// Returns the first active row no column covers.
    pub fn uncovered_row(&self) -> Option<usize> {
        self.rows().find(|&r| self.rows[r].num == 0)
    }

    /// Drops every cell and reactivates all rows and columns. Sizes and
    /// costs are kept.
    pub fn clear(&mut self) {
        self.pool.clear();
        for head in self.rows.iter_mut().chain(self.cols.iter_mut()) {
            *head = LineHead {
                active: true,
                ..LineHead::empty()
            };
        }
        self.row_list.refill();
        self.col_list.refill();
        self.trail.clear();
        self.markers = 0;
    }

    /// Recounts the active lists and every live line and compares against
    /// the cached counters.
    pub fn check_consistency(&self) -> bool {
        let rows_ok = self.rows().count() == self.row_num()
            && self
                .rows()
                .all(|r| self.rows[r].active && self.row_cols(r).count() == self.rows[r].num);
        let cols_ok = self.cols().count() == self.col_num()
            && self
                .cols()
                .all(|c| self.cols[c].active && self.col_rows(c).count() == self.cols[c].num);
        let cells_ok = self.rows().all(|r| {
            self.row_cols(r)
                .all(|c| self.cols[c].active && self.col_rows(c).any(|r2| r2 == r))
        });
        rows_ok && cols_ok && cells_ok
    }

    /// Creates a cell and splices it into both lists at its sorted position.
    fn link_cell(&mut self, row: usize, col: usize) -> bool {
        // Walk from the tail: construction usually inserts in increasing order.
        let mut row_after = self.rows[row].last;
        while !row_after.is_nil() && self.pool.get(row_after).col > col {
            row_after = self.pool.get(row_after).row_prev;
        }
        if !row_after.is_nil() && self.pool.get(row_after).col == col {
            return false;
        }
        let mut col_after = self.cols[col].last;
        while !col_after.is_nil() && self.pool.get(col_after).row > row {
            col_after = self.pool.get(col_after).col_prev;
        }

        let id = self.pool.alloc(row, col);

        let row_next = if row_after.is_nil() {
            self.rows[row].first
        } else {
            self.pool.get(row_after).row_next
        };
        {
            let cell = self.pool.get_mut(id);
            cell.row_prev = row_after;
            cell.row_next = row_next;
        }
        self.relink_into_row(id);

        let col_next = if col_after.is_nil() {
            self.cols[col].first
        } else {
            self.pool.get(col_after).col_next
        };
        {
            let cell = self.pool.get_mut(id);
            cell.col_prev = col_after;
            cell.col_next = col_next;
        }
        self.relink_into_col(id);
        true
    }

    fn unlink_from_row(&mut self, id: CellId) {
        let cell = *self.pool.get(id);
        let head = &mut self.rows[cell.row];
        if cell.row_prev.is_nil() {
            head.first = cell.row_next;
        }
        if cell.row_next.is_nil() {
            head.last = cell.row_prev;
        }
        head.num -= 1;
        if !cell.row_prev.is_nil() {
            self.pool.get_mut(cell.row_prev).row_next = cell.row_next;
        }
        if !cell.row_next.is_nil() {
            self.pool.get_mut(cell.row_next).row_prev = cell.row_prev;
        }
    }

    fn relink_into_row(&mut self, id: CellId) {
        let cell = *self.pool.get(id);
        let head = &mut self.rows[cell.row];
        if cell.row_prev.is_nil() {
            head.first = id;
        }
        if cell.row_next.is_nil() {
            head.last = id;
        }
        head.num += 1;
        if !cell.row_prev.is_nil() {
            self.pool.get_mut(cell.row_prev).row_next = id;
        }
        if !cell.row_next.is_nil() {
            self.pool.get_mut(cell.row_next).row_prev = id;
        }
    }

    fn unlink_from_col(&mut self, id: CellId) {
        let cell = *self.pool.get(id);
        let head = &mut self.cols[cell.col];
        if cell.col_prev.is_nil() {
            head.first = cell.col_next;
        }
        if cell.col_next.is_nil() {
            head.last = cell.col_prev;
        }
        head.num -= 1;
        if !cell.col_prev.is_nil() {
            self.pool.get_mut(cell.col_prev).col_next = cell.col_next;
        }
        if !cell.col_next.is_nil() {
            self.pool.get_mut(cell.col_next).col_prev = cell.col_prev;
        }
    }

    fn relink_into_col(&mut self, id: CellId) {
        let cell = *self.pool.get(id);
        let head = &mut self.cols[cell.col];
        if cell.col_prev.is_nil() {
            head.first = id;
        }
        if cell.col_next.is_nil() {
            head.last = id;
        }
        head.num += 1;
        if !cell.col_prev.is_nil() {
            self.pool.get_mut(cell.col_prev).col_next = id;
        }
        if !cell.col_next.is_nil() {
            self.pool.get_mut(cell.col_next).col_prev = id;
        }
    }

    fn release_row_cells(&mut self, row: usize) {
        let mut cur = self.rows[row].first;
        while !cur.is_nil() {
            let next = self.pool.get(cur).row_next;
            self.pool.release(cur);
            cur = next;
        }
        let head = &mut self.rows[row];
        head.first = CellId::NIL;
        head.last = CellId::NIL;
        head.num = 0;
    }

    fn release_col_cells(&mut self, col: usize) {
        let mut cur = self.cols[col].first;
        while !cur.is_nil() {
            let next = self.pool.get(cur).col_next;
            self.pool.release(cur);
            cur = next;
        }
        let head = &mut self.cols[col];
        head.first = CellId::NIL;
        head.last = CellId::NIL;
        head.num = 0;
    }
}

impl fmt::Display for CoverMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "rows {}/{} cols {}/{}",
            self.row_num(),
            self.row_size(),
            self.col_num(),
            self.col_size()
        )?;
        for r in self.rows() {
            write!(f, "row {r}:")?;
            for c in self.row_cols(r) {
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "costs:")?;
        for c in self.cols() {
            write!(f, " {c}={}", self.costs[c])?;
        }
        writeln!(f)
    }
}

/// Live columns of a row. See [`CoverMatrix::row_cols`].
#[derive(Debug, Clone)]
pub struct RowCols<'a> {
    matrix: &'a CoverMatrix,
    cur: CellId,
}

impl Iterator for RowCols<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cur.is_nil() {
            return None;
        }
        let cell = self.matrix.pool.get(self.cur);
        self.cur = cell.row_next;
        Some(cell.col)
    }
}

/// Live rows of a column. See [`CoverMatrix::col_rows`].
#[derive(Debug, Clone)]
pub struct ColRows<'a> {
    matrix: &'a CoverMatrix,
    cur: CellId,
}

impl Iterator for ColRows<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cur.is_nil() {
            return None;
        }
        let cell = self.matrix.pool.get(self.cur);
        self.cur = cell.col_next;
        Some(cell.row)
    }
}
