//! Grid files
//!
//! A grid file holds the integer grid and, optionally, planner settings:
//!
//! ```toml
//! grid = [
//!     [1, -1, 0],
//!     [0,  0, 0],
//!     [0, -1, 2],
//! ]
//!
//! [search]
//! heuristic = "manhattan"
//! priority-update = "stale"
//! path-order = "finish-first"
//! ```
//!
//! The format is picked from the extension: `.toml`, `.json`, anything else
//! is read as YAML.

use anyhow::{bail, Context, Result};
use gridpath::prelude::{AStarConfig, Cell, CellKind, GridGraph};
use gridpath::grid::cell::BLOCKED_CODE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Grid plus planner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFile {
    /// Row-major grid codes: 1 start, 2 finish, -1 blocked, anything else open
    pub grid: Vec<Vec<i64>>,
    #[serde(default)]
    pub search: AStarConfig,
}

impl GridFile {
    /// Load a grid file, detecting the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file {:?}", path))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let file: GridFile = match extension.as_deref() {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML grid file {:?}", path))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON grid file {:?}", path))?,
            // Default to YAML for .yaml, .yml, or no extension
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML grid file {:?}", path))?,
        };

        info!(
            path = %path.display(),
            rows = file.grid.len(),
            "loaded grid file"
        );
        Ok(file)
    }

    /// Load `path`, or fall back to the built-in sample grid
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no grid file given, using the sample grid");
                Ok(Self::sample())
            }
        }
    }

    /// 5x6 demo grid with a detour around two wall segments
    pub fn sample() -> Self {
        Self {
            grid: vec![
                vec![1, -1, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
                vec![0, -1, 0, -1, 0, 0],
                vec![0, -1, 0, 0, -1, 0],
                vec![0, 0, 0, 0, -1, 2],
            ],
            search: AStarConfig::default(),
        }
    }

    /// Mark `cell` as blocked before the graph is built
    pub fn block(&mut self, cell: Cell) -> Result<()> {
        let Some(code) = self
            .grid
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        else {
            bail!("Cell {} is outside the grid", cell);
        };

        match CellKind::from_code(*code) {
            CellKind::Start => bail!("Cannot block the start cell {}", cell),
            CellKind::Finish => bail!("Cannot block the finish cell {}", cell),
            CellKind::Blocked | CellKind::Open => *code = BLOCKED_CODE,
        }
        Ok(())
    }

    /// Build the search graph
    pub fn build(&self) -> Result<GridGraph> {
        GridGraph::from_codes(&self.grid).context("Invalid grid")
    }
}

/// Parse a `ROW,COL` pair
pub fn parse_cell(value: &str) -> Result<Cell, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", value))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row '{}': {}", row.trim(), e))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{}': {}", col.trim(), e))?;
    Ok(Cell::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::prelude::{HeuristicKind, PathOrder, PriorityUpdate};
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_file(
            ".toml",
            r#"
grid = [[1, -1, 0], [0, 0, 2]]

[search]
heuristic = "manhattan"
path-order = "start-first"
"#,
        );

        let loaded = GridFile::load(file.path()).unwrap();
        assert_eq!(loaded.grid, vec![vec![1, -1, 0], vec![0, 0, 2]]);
        assert_eq!(loaded.search.heuristic, HeuristicKind::Manhattan);
        assert_eq!(loaded.search.path_order, PathOrder::StartFirst);
        assert_eq!(loaded.search.priority_update, PriorityUpdate::Stale);
    }

    #[test]
    fn test_load_json_without_search_table() {
        let file = write_file(".json", r#"{"grid": [[1, 2]]}"#);

        let loaded = GridFile::load(file.path()).unwrap();
        assert_eq!(loaded.grid, vec![vec![1, 2]]);
        assert_eq!(loaded.search, AStarConfig::default());
    }

    #[test]
    fn test_load_yaml() {
        let file = write_file(
            ".yaml",
            "grid:\n  - [1, 0]\n  - [-1, 2]\nsearch:\n  priority-update: refresh\n",
        );

        let loaded = GridFile::load(file.path()).unwrap();
        assert_eq!(loaded.grid, vec![vec![1, 0], vec![-1, 2]]);
        assert_eq!(loaded.search.priority_update, PriorityUpdate::Refresh);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let file = write_file(".toml", "grid = \"not a grid\"");
        let err = GridFile::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GridFile::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read grid file"));
    }

    #[test]
    fn test_sample_builds() {
        let graph = GridFile::load_or_sample(None).unwrap().build().unwrap();
        assert_eq!(graph.dimensions(), (5, 6));
        assert_eq!(graph.start(), Cell::new(0, 0));
        assert_eq!(graph.finish(), Cell::new(4, 5));
    }

    #[test]
    fn test_block_cell() {
        let mut file = GridFile::sample();
        file.block(Cell::new(3, 5)).unwrap();
        assert_eq!(file.grid[3][5], -1);

        // Already blocked is fine
        file.block(Cell::new(3, 5)).unwrap();

        assert!(file.block(Cell::new(0, 0)).is_err());
        assert!(file.block(Cell::new(4, 5)).is_err());
        assert!(file.block(Cell::new(9, 0)).is_err());
    }

    #[test]
    fn test_build_rejects_malformed_grid() {
        let file = GridFile {
            grid: vec![vec![1, 0], vec![2]],
            search: AStarConfig::default(),
        };
        let err = file.build().unwrap_err();
        assert!(format!("{:#}", err).contains("Row 1 has 1 columns"));
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3,5"), Ok(Cell::new(3, 5)));
        assert_eq!(parse_cell(" 0 , 12 "), Ok(Cell::new(0, 12)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
        assert!(parse_cell("1,-2").is_err());
    }
}
