//! Errors raised while turning raw grid input into a graph

use crate::grid::Cell;
use thiserror::Error;

/// Grid construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid has no cells")]
    Empty,

    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid has no start cell (code 1)")]
    MissingStart,

    #[error("Grid has no finish cell (code 2)")]
    MissingFinish,

    #[error("Start cell appears twice: {first} and {second}")]
    DuplicateStart { first: Cell, second: Cell },

    #[error("Finish cell appears twice: {first} and {second}")]
    DuplicateFinish { first: Cell, second: Cell },
}

/// Result type for grid construction
pub type GridResult<T> = Result<T, GridError>;
