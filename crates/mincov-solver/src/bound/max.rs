use mincov_core::{Cost, CoverMatrix};

use super::LowerBound;

/// Maximum over an ordered list of bounds.
///
/// The maximum of admissible bounds is admissible. An empty list yields 0.
#[derive(Debug, Default)]
pub struct MaxBound {
    bounds: Vec<Box<dyn LowerBound>>,
}

impl MaxBound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member bound.
    pub fn with_bound(mut self, bound: Box<dyn LowerBound>) -> Self {
        self.bounds.push(bound);
        self
    }

    pub fn add_bound(&mut self, bound: Box<dyn LowerBound>) {
        self.bounds.push(bound);
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl LowerBound for MaxBound {
    fn lower_bound(&self, matrix: &CoverMatrix) -> Cost {
        self.bounds
            .iter()
            .map(|b| b.lower_bound(matrix))
            .max()
            .unwrap_or(0)
    }
}
