//! Pure computational algorithms for grid path planning
//!
//! Nothing in here performs I/O. Every algorithm takes a read-only graph and
//! returns plain values, so the same graph can be searched repeatedly.
//!
//! # Available Algorithms
//!
//! - **heuristic**: admissible remaining-cost estimates between two cells
//! - **astar**: A* shortest path over a 4-connected grid graph

pub mod astar;
pub mod heuristic;
