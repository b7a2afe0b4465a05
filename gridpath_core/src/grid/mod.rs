//! 2D grid model
//!
//! A rectangular matrix of integer codes becomes a 4-connected graph:
//!
//! - `1` marks the start cell (exactly one)
//! - `2` marks the finish cell (exactly one)
//! - `-1` marks a blocked cell (kept as a node, but with no edges)
//! - anything else is open floor

pub mod cell;
pub mod graph;

pub use cell::{Cell, CellKind};
pub use graph::{Graph, GridGraph};
