//! Error types for grid construction and search queries.

use grid_util::point::Point;
use thiserror::Error;

/// Errors raised when building a [LabelGrid](crate::LabelGrid) or querying it with
/// coordinates it does not contain. An unreachable goal is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{point} lies outside the {width}x{height} grid")]
    OutOfRange {
        point: Point,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
