use crate::config::GridFile;
use crate::render::{format_path, render_grid, RenderOptions, LEGEND};
use anyhow::{Context, Result};
use colored::*;
use gridpath::prelude::{
    AStar, AStarConfig, Cell, HeuristicKind, Path, PathOrder, PriorityUpdate, SearchStats,
};
use serde::Serialize;
use std::path::Path as FsPath;
use tracing::info;

/// Command-line overrides for a solve run
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Replaces the heuristic from the grid file
    pub heuristic: Option<HeuristicKind>,
    /// Re-queue improved cells with a recomputed priority
    pub refresh_priority: bool,
    /// List the path from start to finish
    pub start_first: bool,
    /// Extra cells to block before building the graph
    pub blocked: Vec<Cell>,
    /// Print a JSON report instead of the drawing
    pub json: bool,
    pub render: RenderOptions,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    rows: usize,
    cols: usize,
    start: Cell,
    finish: Cell,
    config: AStarConfig,
    reachable: bool,
    steps: Option<usize>,
    path: Option<&'a Path>,
    stats: SearchStats,
}

/// Load a grid, plan a path and print the outcome
pub fn run_solve(file: Option<&FsPath>, options: &SolveOptions) -> Result<()> {
    let grid = GridFile::load_or_sample(file)?;
    print!("{}", solve_grid(grid, options)?);
    Ok(())
}

/// File settings with command-line overrides applied
pub fn resolve_config(file: &AStarConfig, options: &SolveOptions) -> AStarConfig {
    let mut config = *file;
    if let Some(heuristic) = options.heuristic {
        config.heuristic = heuristic;
    }
    if options.refresh_priority {
        config.priority_update = PriorityUpdate::Refresh;
    }
    if options.start_first {
        config.path_order = PathOrder::StartFirst;
    }
    config
}

/// Plan a path through `grid` and format the result
pub fn solve_grid(mut grid: GridFile, options: &SolveOptions) -> Result<String> {
    for &cell in &options.blocked {
        grid.block(cell)?;
    }

    let graph = grid.build()?;
    let config = resolve_config(&grid.search, options);
    let report = AStar::from_config(&config)
        .solve(&graph)
        .context("Search failed")?;

    info!(
        heuristic = %config.heuristic,
        reachable = report.path.is_some(),
        expanded = report.stats.expanded,
        "search finished"
    );

    if options.json {
        let (rows, cols) = graph.dimensions();
        let json = JsonReport {
            rows,
            cols,
            start: graph.start(),
            finish: graph.finish(),
            config,
            reachable: report.path.is_some(),
            steps: report.path.as_ref().map(Path::steps),
            path: report.path.as_ref(),
            stats: report.stats,
        };
        let mut out = serde_json::to_string_pretty(&json)?;
        out.push('\n');
        return Ok(out);
    }

    let color = options.render.color;
    let mut out = render_grid(&graph, None, &options.render);
    out.push('\n');

    match &report.path {
        Some(path) => {
            let label = if color {
                "Shortest path:".green().bold().to_string()
            } else {
                "Shortest path:".to_string()
            };
            out.push_str(&format!("{} {}\n\n", label, format_path(path)));
            out.push_str(&render_grid(&graph, Some(path), &options.render));
            out.push('\n');
            out.push_str(LEGEND);
            out.push('\n');
            out.push_str(&format!(
                "{} steps, {} cells expanded, {} discovered ({})\n",
                path.steps(),
                report.stats.expanded,
                report.stats.discovered,
                describe(&config)
            ));
        }
        None => {
            let label = if color {
                "Unreachable".red().bold().to_string()
            } else {
                "Unreachable".to_string()
            };
            out.push_str(&format!("{}\n", label));
            out.push_str(&format!(
                "{} cells expanded before the open set ran dry ({})\n",
                report.stats.expanded,
                describe(&config)
            ));
        }
    }

    Ok(out)
}

fn describe(config: &AStarConfig) -> String {
    let priorities = match config.priority_update {
        PriorityUpdate::Stale => "stale priorities",
        PriorityUpdate::Refresh => "refreshed priorities",
    };
    format!("heuristic {}, {}", config.heuristic, priorities)
}
