use super::cell::{Cell, CellKind};
use crate::error::{GridError, GridResult};
use tracing::debug;

/// Up, down, left, right. Search tie-breaks depend on this order.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Read-only adjacency view consumed by the search algorithms
pub trait Graph {
    /// Whether `cell` is a node of this graph
    fn contains(&self, cell: Cell) -> bool;

    /// Cells sharing an edge with `cell`, in a stable order.
    /// Unknown cells have no neighbors.
    fn neighbors(&self, cell: Cell) -> &[Cell];
}

/// 4-connected graph built from a matrix of grid codes
#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    kinds: Vec<CellKind>,
    adjacency: Vec<Vec<Cell>>,
    start: Cell,
    finish: Cell,
}

impl GridGraph {
    /// Build a graph from grid codes
    ///
    /// The grid must be rectangular and contain exactly one start (`1`) and
    /// one finish (`2`). Blocked cells (`-1`) stay in the graph with every
    /// incident edge removed.
    pub fn from_codes<R: AsRef<[i64]>>(codes: &[R]) -> GridResult<Self> {
        let rows = codes.len();
        let cols = codes.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut kinds = Vec::with_capacity(rows * cols);
        let mut start: Option<Cell> = None;
        let mut finish: Option<Cell> = None;

        for (row, line) in codes.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }

            for (col, &code) in line.iter().enumerate() {
                let cell = Cell::new(row, col);
                let kind = CellKind::from_code(code);
                match kind {
                    CellKind::Start => {
                        if let Some(first) = start {
                            return Err(GridError::DuplicateStart {
                                first,
                                second: cell,
                            });
                        }
                        start = Some(cell);
                    }
                    CellKind::Finish => {
                        if let Some(first) = finish {
                            return Err(GridError::DuplicateFinish {
                                first,
                                second: cell,
                            });
                        }
                        finish = Some(cell);
                    }
                    CellKind::Blocked | CellKind::Open => {}
                }
                kinds.push(kind);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let finish = finish.ok_or(GridError::MissingFinish)?;

        let mut graph = Self {
            rows,
            cols,
            kinds,
            adjacency: Vec::new(),
            start,
            finish,
        };
        let adjacency = (0..rows * cols)
            .map(|idx| graph.link(graph.cell_at(idx)))
            .collect();
        graph.adjacency = adjacency;

        debug!(
            rows,
            cols,
            edges = graph.edge_count(),
            blocked = graph.blocked_count(),
            "built grid graph"
        );

        Ok(graph)
    }

    fn link(&self, cell: Cell) -> Vec<Cell> {
        if !self.is_walkable(cell) {
            return Vec::new();
        }
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| cell.offset(dr, dc))
            .filter(|&n| self.is_walkable(n))
            .collect()
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }

    fn cell_at(&self, idx: usize) -> Cell {
        Cell::new(idx / self.cols, idx % self.cols)
    }

    fn is_walkable(&self, cell: Cell) -> bool {
        self.kind(cell).map(|k| k.is_walkable()).unwrap_or(false)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Designated start cell
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Designated finish cell
    pub fn finish(&self) -> Cell {
        self.finish
    }

    /// Classification of `cell`, None when outside the grid
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.index_of(cell).map(|idx| self.kinds[idx])
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows * self.cols).map(move |idx| self.cell_at(idx))
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.kinds
            .iter()
            .filter(|k| **k == CellKind::Blocked)
            .count()
    }

    /// Grid codes in the same layout accepted by [`GridGraph::from_codes`]
    pub fn to_codes(&self) -> Vec<Vec<i64>> {
        self.kinds
            .chunks(self.cols)
            .map(|row| row.iter().map(CellKind::code).collect())
            .collect()
    }
}

impl Graph for GridGraph {
    fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    fn neighbors(&self, cell: Cell) -> &[Cell] {
        match self.index_of(cell) {
            Some(idx) => &self.adjacency[idx],
            None => &[],
        }
    }
}
