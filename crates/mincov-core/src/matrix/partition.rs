//! Block partitioning of the active matrix.
//!
//! Rows and columns connected through shared cells form a block. Blocks
//! share neither rows nor columns, so each can be covered independently and
//! the optimal costs add up.

use super::CoverMatrix;

/// Rows and columns of one independent block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl CoverMatrix {
    /// Splits the active matrix in two when it is not connected.
    ///
    /// The first block is the connected component of the first active row;
    /// the second holds every other active row and column. Returns `None`
    /// when the active matrix is a single block.
    pub fn block_partition(&self) -> Option<(Block, Block)> {
        let start = self.first_row()?;

        let mut row_mark = vec![false; self.row_size()];
        let mut col_mark = vec![false; self.col_size()];
        let mut queue = vec![start];
        row_mark[start] = true;
        let mut row_hits = 1;
        let mut col_hits = 0;
        while let Some(r) = queue.pop() {
            for c in self.row_cols(r) {
                if col_mark[c] {
                    continue;
                }
                col_mark[c] = true;
                col_hits += 1;
                for r2 in self.col_rows(c) {
                    if !row_mark[r2] {
                        row_mark[r2] = true;
                        row_hits += 1;
                        queue.push(r2);
                    }
                }
            }
        }
        if row_hits == self.row_num() {
            return None;
        }

        let mut first = Block {
            rows: Vec::with_capacity(row_hits),
            cols: Vec::with_capacity(col_hits),
        };
        let mut second = Block::default();
        for r in self.rows() {
            if row_mark[r] {
                first.rows.push(r);
            } else {
                second.rows.push(r);
            }
        }
        for c in self.cols() {
            if col_mark[c] {
                first.cols.push(c);
            } else {
                second.cols.push(c);
            }
        }
        Some((first, second))
    }
}
