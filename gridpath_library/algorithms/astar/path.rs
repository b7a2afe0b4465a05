//! Planned paths and predecessor-chain reconstruction

use gridpath_core::Cell;
use serde::{Deserialize, Serialize};

/// Order in which a [`Path`] lists its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathOrder {
    /// Finish first, start last (the order the predecessor walk produces)
    #[default]
    FinishFirst,
    /// Start first, finish last
    StartFirst,
}

impl PathOrder {
    pub fn reversed(self) -> Self {
        match self {
            PathOrder::FinishFirst => PathOrder::StartFirst,
            PathOrder::StartFirst => PathOrder::FinishFirst,
        }
    }
}

/// A planned path. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    cells: Vec<Cell>,
    order: PathOrder,
}

impl Path {
    /// Cells in [`Path::order`]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn order(&self) -> PathOrder {
        self.order
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit steps, i.e. the path cost
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Cell {
        match self.order {
            PathOrder::FinishFirst => self.cells[self.cells.len() - 1],
            PathOrder::StartFirst => self.cells[0],
        }
    }

    pub fn finish(&self) -> Cell {
        match self.order {
            PathOrder::FinishFirst => self.cells[0],
            PathOrder::StartFirst => self.cells[self.cells.len() - 1],
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Same cells, listed the other way round
    pub fn reversed(mut self) -> Self {
        self.cells.reverse();
        self.order = self.order.reversed();
        self
    }

    /// Re-list the cells in `order`
    pub fn into_order(self, order: PathOrder) -> Self {
        if self.order == order {
            self
        } else {
            self.reversed()
        }
    }

    /// Whether every consecutive pair of cells shares a grid edge
    pub fn is_connected(&self) -> bool {
        self.cells
            .windows(2)
            .all(|pair| pair[0].is_orthogonal_neighbor(pair[1]))
    }
}

/// Walk predecessor links from `finish` up to the root of the search tree.
///
/// The root is the cell whose predecessor is `None`. The returned path lists
/// `finish` first and the root last; when `finish` is the root the path holds
/// that single cell.
pub(crate) fn reconstruct<F>(finish: Cell, predecessor: F) -> Path
where
    F: Fn(Cell) -> Option<Cell>,
{
    let cells: Vec<Cell> = std::iter::successors(Some(finish), |&cell| predecessor(cell)).collect();

    Path {
        cells,
        order: PathOrder::FinishFirst,
    }
}
