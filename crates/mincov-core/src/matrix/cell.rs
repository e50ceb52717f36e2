//! Cell arena for the cover matrix.
//!
//! Cells are addressed by stable `CellId` handles. Released cells go on a
//! free list and are handed out again before the arena grows.

/// Handle to a cell in the [`CellPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CellId(u32);

impl CellId {
    /// End-of-list marker.
    pub(crate) const NIL: CellId = CellId(u32::MAX);

    #[inline]
    pub(crate) fn is_nil(self) -> bool {
        self == Self::NIL
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A row-column incidence, linked into both the row list and the column list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) row_prev: CellId,
    pub(crate) row_next: CellId,
    pub(crate) col_prev: CellId,
    pub(crate) col_next: CellId,
}

/// Growable arena of cells with free-list reuse.
#[derive(Debug, Clone, Default)]
pub(crate) struct CellPool {
    cells: Vec<Cell>,
    free: Vec<CellId>,
}

impl CellPool {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Allocates an unlinked cell, reusing a released slot when one exists.
    pub(crate) fn alloc(&mut self, row: usize, col: usize) -> CellId {
        let cell = Cell {
            row,
            col,
            row_prev: CellId::NIL,
            row_next: CellId::NIL,
            col_prev: CellId::NIL,
            col_next: CellId::NIL,
        };
        match self.free.pop() {
            Some(id) => {
                self.cells[id.index()] = cell;
                id
            }
            None => {
                assert!(
                    self.cells.len() < u32::MAX as usize,
                    "cell pool exhausted the handle space"
                );
                let id = CellId(self.cells.len() as u32);
                self.cells.push(cell);
                id
            }
        }
    }

    /// Returns a cell to the pool. The handle must not be used afterwards.
    pub(crate) fn release(&mut self, id: CellId) {
        debug_assert!(!id.is_nil());
        self.free.push(id);
    }

    /// Releases every cell at once.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
        self.free.clear();
    }

    #[inline]
    pub(crate) fn get(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.index()]
    }

    /// Number of cells currently handed out.
    pub(crate) fn live(&self) -> usize {
        self.cells.len() - self.free.len()
    }

    /// Number of slots ever allocated.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }
}
