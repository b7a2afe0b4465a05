//! Remaining-cost heuristics
//!
//! A heuristic estimates the number of unit steps between two cells. For A*
//! to return shortest paths it must never overestimate that number.
//!
//! # Available heuristics
//!
//! - [`signed_sum`]: `|Δrow + Δcol|`. Opposite deltas cancel, so it can
//!   report 0 for distinct cells. It is still admissible and consistent, just
//!   less informed. This is the default.
//! - [`manhattan`]: `|Δrow| + |Δcol|`, exact on an obstacle-free 4-connected
//!   grid.
//!
//! Any `Fn(Cell, Cell) -> u64` closure can be used as well:
//!
//! ```rust
//! use gridpath_core::Cell;
//! use gridpath_library::algorithms::heuristic::Heuristic;
//!
//! let zero = |_: Cell, _: Cell| 0u64; // Dijkstra
//! assert_eq!(zero.estimate(Cell::new(0, 0), Cell::new(3, 3)), 0);
//! ```

use gridpath_core::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estimate of the remaining cost from one cell to another
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> u64;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> u64,
{
    fn estimate(&self, from: Cell, to: Cell) -> u64 {
        self(from, to)
    }
}

/// `|Δrow + Δcol|`
pub fn signed_sum(from: Cell, to: Cell) -> u64 {
    let (dr, dc) = from.delta(to);
    (dr + dc).unsigned_abs()
}

/// `|Δrow| + |Δcol|`
pub fn manhattan(from: Cell, to: Cell) -> u64 {
    (from.row.abs_diff(to.row) + from.col.abs_diff(to.col)) as u64
}

/// Built-in heuristic selector, used by configuration files and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    #[default]
    SignedSum,
    Manhattan,
}

impl HeuristicKind {
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::SignedSum => "signed-sum",
            HeuristicKind::Manhattan => "manhattan",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: Cell, to: Cell) -> u64 {
        match self {
            HeuristicKind::SignedSum => signed_sum(from, to),
            HeuristicKind::Manhattan => manhattan(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "signed-sum" | "signed_sum" => Ok(HeuristicKind::SignedSum),
            "manhattan" => Ok(HeuristicKind::Manhattan),
            other => Err(format!(
                "unknown heuristic '{}', expected 'signed-sum' or 'manhattan'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_sum_cancels_opposite_deltas() {
        // Δrow = +2, Δcol = -2
        assert_eq!(signed_sum(Cell::new(0, 2), Cell::new(2, 0)), 0);
        assert_eq!(manhattan(Cell::new(0, 2), Cell::new(2, 0)), 4);
    }

    #[test]
    fn test_signed_sum_matches_manhattan_on_same_direction() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 5);
        assert_eq!(signed_sum(a, b), 9);
        assert_eq!(signed_sum(b, a), 9);
        assert_eq!(manhattan(a, b), 9);
    }

    #[test]
    fn test_never_exceeds_manhattan() {
        for r1 in 0..5 {
            for c1 in 0..5 {
                for r2 in 0..5 {
                    for c2 in 0..5 {
                        let a = Cell::new(r1, c1);
                        let b = Cell::new(r2, c2);
                        assert!(signed_sum(a, b) <= manhattan(a, b));
                    }
                }
            }
        }
    }

    #[test]
    fn test_consistent_across_single_steps() {
        // |h(a) - h(b)| <= 1 for every unit step a -> b
        let goal = Cell::new(2, 3);
        for r in 0..5 {
            for c in 0..5 {
                let a = Cell::new(r, c);
                for b in [Cell::new(r + 1, c), Cell::new(r, c + 1)] {
                    assert!(signed_sum(a, goal).abs_diff(signed_sum(b, goal)) <= 1);
                    assert!(manhattan(a, goal).abs_diff(manhattan(b, goal)) <= 1);
                }
            }
        }
    }

    #[test]
    fn test_kind_dispatch() {
        let a = Cell::new(0, 3);
        let b = Cell::new(3, 0);
        assert_eq!(HeuristicKind::SignedSum.estimate(a, b), 0);
        assert_eq!(HeuristicKind::Manhattan.estimate(a, b), 6);
        assert_eq!(HeuristicKind::default(), HeuristicKind::SignedSum);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "manhattan".parse::<HeuristicKind>(),
            Ok(HeuristicKind::Manhattan)
        );
        assert_eq!(
            "Signed_Sum".parse::<HeuristicKind>(),
            Ok(HeuristicKind::SignedSum)
        );
        assert!("euclidean".parse::<HeuristicKind>().is_err());
        assert_eq!(HeuristicKind::Manhattan.to_string(), "manhattan");
    }

    #[test]
    fn test_closure_heuristic() {
        let doubled = |a: Cell, b: Cell| 2 * manhattan(a, b);
        assert_eq!(doubled.estimate(Cell::new(0, 0), Cell::new(1, 1)), 4);
    }
}
