//! # gridpath library
//!
//! Search algorithms that run over the grid model from `gridpath_core`.
//!
//! ## Structure
//!
//! ```text
//! gridpath_library/
//! ── algorithms/
//!    ── heuristic/   # Remaining-cost estimates
//!    ── astar/       # A* engine, open set, path reconstruction
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gridpath_core::GridGraph;
//! use gridpath_library::algorithms::astar::find_path;
//! use gridpath_library::algorithms::heuristic::signed_sum;
//!
//! let graph = GridGraph::from_codes(&[vec![1, 0], vec![0, 2]]).unwrap();
//! let path = find_path(&graph, graph.start(), graph.finish(), &signed_sum)
//!     .unwrap()
//!     .expect("open grid is always solvable");
//!
//! // Finish first, start last
//! assert_eq!(path.finish(), graph.finish());
//! assert_eq!(path.len(), 3);
//! ```

pub mod algorithms;

pub use algorithms::astar::{
    find_path, AStar, AStarConfig, Path, PathOrder, PriorityUpdate, SearchError, SearchReport,
    SearchResult, SearchStats,
};
pub use algorithms::heuristic::{manhattan, signed_sum, Heuristic, HeuristicKind};
