//! # gridpath
//!
//! Shortest paths between two cells of a 2D grid with blocked cells, using A*.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridpath::prelude::*;
//!
//! let grid = GridGraph::from_codes(&[
//!     vec![1, -1, 0],
//!     vec![0, 0, 0],
//!     vec![-1, 0, 2],
//! ])?;
//!
//! match AStar::new().plan(&grid, grid.start(), grid.finish())? {
//!     Some(path) => println!("Shortest path: {:?}", path.cells()),
//!     None => println!("Unreachable"),
//! }
//! # Ok::<(), AnyError>(())
//! ```

// Re-export core components
pub use gridpath_core::{self, *};

// Re-export the algorithms with an alias
pub use gridpath_library as library;

/// Everything needed to build a grid and search it
pub mod prelude {
    // Grid model
    pub use gridpath_core::grid::{Cell, CellKind, Graph, GridGraph};

    // Algorithms
    pub use gridpath_library::algorithms::astar::{
        find_path, AStar, AStarConfig, Path, PathOrder, PriorityUpdate, SearchReport,
        SearchStats,
    };
    pub use gridpath_library::algorithms::heuristic::{
        manhattan, signed_sum, Heuristic, HeuristicKind,
    };

    // Error types
    pub use gridpath_core::error::{GridError, GridResult};
    pub use gridpath_library::algorithms::astar::{SearchError, SearchResult};

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Error as AnyError, Result as AnyResult};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get gridpath version
pub fn version() -> &'static str {
    VERSION
}
