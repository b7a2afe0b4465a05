use crate::config::GridFile;
use crate::render::{render_grid, RenderOptions, LEGEND};
use anyhow::Result;
use std::path::Path;

/// Render a grid without searching it
pub fn run_show(file: Option<&Path>, options: &RenderOptions) -> Result<()> {
    let grid = GridFile::load_or_sample(file)?;
    print!("{}", show_grid(&grid, options)?);
    Ok(())
}

pub fn show_grid(grid: &GridFile, options: &RenderOptions) -> Result<String> {
    let graph = grid.build()?;
    let (rows, cols) = graph.dimensions();

    let mut out = format!(
        "Grid {}x{}: start {}, finish {}, {} blocked\n\n",
        rows,
        cols,
        graph.start(),
        graph.finish(),
        graph.blocked_count()
    );
    out.push_str(&render_grid(&graph, None, options));
    out.push('\n');
    out.push_str(LEGEND);
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sample() {
        let options = RenderOptions {
            color: false,
            coords: false,
        };
        let out = show_grid(&GridFile::sample(), &options).unwrap();

        assert!(out.starts_with("Grid 5x6: start (0, 0), finish (4, 5), 6 blocked\n"));
        assert!(out.contains("S # . . . .\n"));
        assert!(out.ends_with(&format!("{}\n", LEGEND)));
    }
}
