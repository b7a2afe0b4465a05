//! Terminal rendering of grids and planned paths
//!
//! ```text
//! S # . . . .
//! * * * * * .
//! . # . # * *
//! . # . . # *
//! . . . . # F
//! ```

use colored::*;
use gridpath::library::Path;
use gridpath::prelude::{Cell, CellKind, GridGraph};
use std::collections::HashSet;

/// Legend printed under rendered grids
pub const LEGEND: &str = "S = start, F = finish, # = blocked, * = path, . = open";

/// Rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors
    pub color: bool,
    /// Label rows and columns
    pub coords: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            coords: false,
        }
    }
}

fn glyph(kind: CellKind, on_path: bool, color: bool) -> String {
    let (symbol, painted) = match kind {
        CellKind::Start => ("S", "S".green().bold()),
        CellKind::Finish => ("F", "F".bright_black().bold()),
        CellKind::Blocked => ("#", "#".red()),
        CellKind::Open if on_path => ("*", "*".green()),
        CellKind::Open => (".", ".".cyan()),
    };

    if color {
        painted.to_string()
    } else {
        symbol.to_string()
    }
}

/// Draw `graph` one text row per grid row, highlighting `path` if given
pub fn render_grid(graph: &GridGraph, path: Option<&Path>, options: &RenderOptions) -> String {
    let on_path: HashSet<Cell> = path
        .map(|p| p.cells().iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::new();

    if options.coords {
        let header: Vec<String> = (0..graph.cols()).map(|col| (col % 10).to_string()).collect();
        out.push_str("   ");
        out.push_str(&header.join(" "));
        out.push('\n');
    }

    for row in 0..graph.rows() {
        if options.coords {
            out.push_str(&format!("{:>2} ", row));
        }

        let line: Vec<String> = (0..graph.cols())
            .map(|col| {
                let cell = Cell::new(row, col);
                let kind = graph.kind(cell).unwrap_or_default();
                glyph(kind, on_path.contains(&cell), options.color)
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out
}

/// Format path cells as `[(r, c), (r, c), ...]`
pub fn format_path(path: &Path) -> String {
    let cells: Vec<String> = path.cells().iter().map(Cell::to_string).collect();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::prelude::AStar;

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            coords: false,
        }
    }

    fn sample() -> GridGraph {
        GridGraph::from_codes(&[
            vec![1, -1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, -1, 0, -1, 0, 0],
            vec![0, -1, 0, 0, -1, 0],
            vec![0, 0, 0, 0, -1, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_render_without_path() {
        let rendered = render_grid(&sample(), None, &plain());
        assert_eq!(
            rendered,
            "S # . . . .\n\
             . . . . . .\n\
             . # . # . .\n\
             . # . . # .\n\
             . . . . # F\n"
        );
    }

    #[test]
    fn test_render_with_path() {
        let graph = sample();
        let path = AStar::new().solve(&graph).unwrap().path.unwrap();

        let rendered = render_grid(&graph, Some(&path), &plain());
        assert_eq!(
            rendered,
            "S # . . . .\n\
             * * * * * .\n\
             . # . # * *\n\
             . # . . # *\n\
             . . . . # F\n"
        );
    }

    #[test]
    fn test_render_with_coords() {
        let graph = GridGraph::from_codes(&[vec![1, 0], vec![-1, 2]]).unwrap();
        let options = RenderOptions {
            color: false,
            coords: true,
        };

        assert_eq!(
            render_grid(&graph, None, &options),
            "   0 1\n 0 S .\n 1 # F\n"
        );
    }

    #[test]
    fn test_colored_output_contains_symbols() {
        colored::control::set_override(true);
        let graph = GridGraph::from_codes(&[vec![1, -1, 2]]).unwrap();
        let rendered = render_grid(&graph, None, &RenderOptions::default());

        assert!(rendered.contains('S'));
        assert!(rendered.contains('#'));
        assert!(rendered.contains('F'));
        assert!(rendered.contains("\u{1b}["));
    }

    #[test]
    fn test_format_path() {
        let graph = sample();
        let path = AStar::new().solve(&graph).unwrap().path.unwrap();

        assert_eq!(
            format_path(&path),
            "[(4, 5), (3, 5), (2, 5), (2, 4), (1, 4), (1, 3), (1, 2), (1, 1), (1, 0), (0, 0)]"
        );
    }
}
