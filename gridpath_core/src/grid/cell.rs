use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid code for the start cell
pub const START_CODE: i64 = 1;

/// Grid code for the finish cell
pub const FINISH_CODE: i64 = 2;

/// Grid code for a blocked cell
pub const BLOCKED_CODE: i64 = -1;

/// Grid code written for open cells when serializing
pub const OPEN_CODE: i64 = 0;

/// A grid position, identified by (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed (row, column) offset from `self` to `other`
    pub fn delta(&self, other: Cell) -> (i64, i64) {
        (
            other.row as i64 - self.row as i64,
            other.col as i64 - self.col as i64,
        )
    }

    /// Step by (dr, dc), returning None when the result would be negative
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell::new(row, col))
    }

    /// True when the two cells share an edge of the grid
    pub fn is_orthogonal_neighbor(&self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classification of a cell, fixed when the graph is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellKind {
    Start,
    Finish,
    Blocked,
    #[default]
    Open,
}

impl CellKind {
    /// Classify a raw grid code. Unknown codes are open floor.
    pub fn from_code(code: i64) -> Self {
        match code {
            START_CODE => CellKind::Start,
            FINISH_CODE => CellKind::Finish,
            BLOCKED_CODE => CellKind::Blocked,
            _ => CellKind::Open,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            CellKind::Start => START_CODE,
            CellKind::Finish => FINISH_CODE,
            CellKind::Blocked => BLOCKED_CODE,
            CellKind::Open => OPEN_CODE,
        }
    }

    /// Whether the cell takes part in connectivity
    pub fn is_walkable(&self) -> bool {
        !matches!(self, CellKind::Blocked)
    }
}
