//! Command-line front end for gridpath
//!
//! Loads grids from files (or the built-in sample), runs the planner and
//! draws the result in the terminal.

pub mod commands;
pub mod config;
pub mod render;
