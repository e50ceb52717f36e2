//! Row and column heads, and the active list that threads them.

use super::cell::CellId;

/// Head of one row or column: its cell list and live cell count.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineHead {
    pub(crate) first: CellId,
    pub(crate) last: CellId,
    pub(crate) num: usize,
    pub(crate) active: bool,
}

impl LineHead {
    pub(crate) fn empty() -> Self {
        Self {
            first: CellId::NIL,
            last: CellId::NIL,
            num: 0,
            active: false,
        }
    }
}

/// Doubly-linked list over line indices `0..size` with a sentinel at `size`.
///
/// Unlinking keeps the removed node's own links, so relinking nodes in the
/// reverse order of their removal puts each back at its original position.
#[derive(Debug, Clone)]
pub(crate) struct ActiveList {
    prev: Vec<usize>,
    next: Vec<usize>,
    len: usize,
}

impl ActiveList {
    /// Creates a list with nothing linked.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            prev: vec![size; size + 1],
            next: vec![size; size + 1],
            len: 0,
        }
    }

    /// Creates a list with `0..size` linked in order.
    pub(crate) fn full(size: usize) -> Self {
        let mut list = Self::new(size);
        list.refill();
        list
    }

    #[inline]
    fn sentinel(&self) -> usize {
        self.next.len() - 1
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn push_back(&mut self, i: usize) {
        let s = self.sentinel();
        let last = self.prev[s];
        self.prev[i] = last;
        self.next[i] = s;
        self.next[last] = i;
        self.prev[s] = i;
        self.len += 1;
    }

    pub(crate) fn unlink(&mut self, i: usize) {
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p] = n;
        self.prev[n] = p;
        self.len -= 1;
    }

    pub(crate) fn relink(&mut self, i: usize) {
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p] = i;
        self.prev[n] = i;
        self.len += 1;
    }

    /// Drops all links and links `0..size` again in order.
    pub(crate) fn refill(&mut self) {
        let s = self.sentinel();
        self.prev.fill(s);
        self.next.fill(s);
        self.len = 0;
        for i in 0..s {
            self.push_back(i);
        }
    }

    pub(crate) fn first(&self) -> Option<usize> {
        let s = self.sentinel();
        let first = self.next[s];
        (first != s).then_some(first)
    }

    pub(crate) fn iter(&self) -> ActiveIter<'_> {
        let s = self.sentinel();
        ActiveIter {
            list: self,
            cur: self.next[s],
        }
    }
}

/// Iterator over the linked indices of an [`ActiveList`], in list order.
#[derive(Debug, Clone)]
pub struct ActiveIter<'a> {
    list: &'a ActiveList,
    cur: usize,
}

impl Iterator for ActiveIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cur == self.list.sentinel() {
            return None;
        }
        let item = self.cur;
        self.cur = self.list.next[item];
        Some(item)
    }
}
