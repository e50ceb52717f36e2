//! Checkpoint trail for backtracking.
//!
//! `save` pushes a marker; every deletion made while a marker is open is
//! recorded, and `restore` undoes them in reverse order back to the marker.

use super::CoverMatrix;

/// A single entry on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrailEntry {
    Marker,
    RowDeleted(usize),
    ColDeleted(usize),
}

impl CoverMatrix {
    /// Opens a checkpoint.
    pub fn save(&mut self) {
        self.trail.push(TrailEntry::Marker);
        self.markers += 1;
    }

    /// Undoes every deletion since the most recent [`save`](Self::save).
    ///
    /// # Panics
    ///
    /// Panics if no checkpoint is open.
    pub fn restore(&mut self) {
        assert!(self.markers > 0, "restore without a matching save");
        while let Some(entry) = self.trail.pop() {
            match entry {
                TrailEntry::Marker => break,
                TrailEntry::RowDeleted(row) => self.restore_row(row),
                TrailEntry::ColDeleted(col) => self.restore_col(col),
            }
        }
        self.markers -= 1;
    }

    /// Number of open checkpoints.
    pub fn checkpoint_depth(&self) -> usize {
        self.markers
    }

    /// Number of deletions recorded since the most recent checkpoint.
    pub fn pending_deletions(&self) -> usize {
        self.trail
            .iter()
            .rev()
            .take_while(|e| **e != TrailEntry::Marker)
            .count()
    }

    fn restore_row(&mut self, row: usize) {
        debug_assert!(!self.rows[row].active);
        let mut cur = self.rows[row].last;
        while !cur.is_nil() {
            self.relink_into_col(cur);
            cur = self.pool.get(cur).row_prev;
        }
        self.row_list.relink(row);
        self.rows[row].active = true;
    }

    fn restore_col(&mut self, col: usize) {
        debug_assert!(!self.cols[col].active);
        let mut cur = self.cols[col].last;
        while !cur.is_nil() {
            self.relink_into_row(cur);
            cur = self.pool.get(cur).col_prev;
        }
        self.col_list.relink(col);
        self.cols[col].active = true;
    }
}
