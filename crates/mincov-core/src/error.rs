//! Error types for mincov

use thiserror::Error;

use crate::solution::Cost;

/// Main error type for mincov operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MinCovError {
    /// Row index outside the configured row count
    #[error("row {row} out of range (row_size = {row_size})")]
    RowOutOfRange { row: usize, row_size: usize },

    /// Column index outside the configured column count
    #[error("column {col} out of range (col_size = {col_size})")]
    ColOutOfRange { col: usize, col_size: usize },

    /// Column costs must be positive
    #[error("invalid cost {cost} for column {col}: costs must be positive")]
    InvalidCost { col: usize, cost: Cost },

    /// A cost change that would push the sum of all column costs past `Cost::MAX`
    #[error("cost {cost} for column {col} brings the total column cost to {total}, above {max}", max = Cost::MAX)]
    CostOverflow { col: usize, cost: Cost, total: u64 },

    /// A row that no column covers makes the instance infeasible
    #[error("row {0} is not covered by any column")]
    UncoverableRow(usize),

    /// Operation issued before the problem size was set
    #[error("problem size not set")]
    NotSized,

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for mincov operations
pub type Result<T> = std::result::Result<T, MinCovError>;
