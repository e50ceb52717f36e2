//! Cover solutions and their cost.

use std::fmt;

/// Column cost. Costs are positive; the cost of a column set is the sum of member costs.
pub type Cost = u32;

/// A set of columns covering every row of an instance.
///
/// Columns are kept in selection order and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    columns: Vec<usize>,
    cost: Cost,
}

impl Solution {
    /// Creates a solution from its columns and their total cost.
    pub fn new(columns: Vec<usize>, cost: Cost) -> Self {
        debug_assert!(
            {
                let mut sorted = columns.clone();
                sorted.sort_unstable();
                sorted.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate column in solution"
        );
        Self { columns, cost }
    }

    /// Returns the selected columns in selection order.
    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns the total cost.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the number of selected columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no column was selected.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if `col` is part of the solution.
    pub fn contains(&self, col: usize) -> bool {
        self.columns.contains(&col)
    }

    /// Consumes the solution, returning its columns.
    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cost {} [", self.cost)?;
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{col}")?;
        }
        write!(f, "]")
    }
}
