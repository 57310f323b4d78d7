//! Error types for query operations
//!
//! Queries over absent data succeed with empty results; only the two random
//! selections and the range guard can fail, so the error surface stays small.

use std::fmt;

/// Main error type for all query operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No populated candidate to select from
    ///
    /// Raised by the random selections when the grid (or the neighborhood
    /// being sampled) contains no populated cell. Picking an index from an
    /// empty collection is undefined, so it is rejected up front.
    EmptyGrid {
        /// Name of the operation that found no candidates
        operation: &'static str,
        /// Number of candidate cells that were examined before giving up
        cells_scanned: usize,
    },

    /// Range query parameter validation failed
    InvalidRange {
        /// The negative range that was supplied
        range: i32,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid {
                operation,
                cells_scanned,
            } => {
                write!(
                    f,
                    "No populated tiles available for {operation} ({cells_scanned} cells scanned)"
                )
            }
            Self::InvalidRange { range } => {
                write!(f, "Range must be non-negative, got {range}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Convenience type alias for query results
pub type Result<T> = std::result::Result<T, QueryError>;

/// Create an empty-grid error for a named operation
pub const fn empty_grid(operation: &'static str, cells_scanned: usize) -> QueryError {
    QueryError::EmptyGrid {
        operation,
        cells_scanned,
    }
}
