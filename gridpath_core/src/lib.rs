//! # gridpath core
//!
//! Grid model shared by the search algorithms and the tooling.
//!
//! ## Structure
//!
//! ```text
//! gridpath_core/
//! ── grid/      # Cell identity, classification and the 4-connected grid graph
//! ── error.rs   # Construction errors
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gridpath_core::grid::{Cell, Graph, GridGraph};
//!
//! let graph = GridGraph::from_codes(&[
//!     vec![1, 0, 0],
//!     vec![-1, -1, 0],
//!     vec![2, 0, 0],
//! ])
//! .unwrap();
//!
//! assert_eq!(graph.start(), Cell::new(0, 0));
//! assert!(graph.neighbors(Cell::new(1, 0)).is_empty());
//! ```

pub mod error;
pub mod grid;

pub use error::{GridError, GridResult};
pub use grid::{Cell, CellKind, Graph, GridGraph};
