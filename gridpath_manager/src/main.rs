use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use gridpath::prelude::{Cell, HeuristicKind};
use gridpath_manager::commands::{show, solve};
use gridpath_manager::config::parse_cell;
use gridpath_manager::render::RenderOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridpath")]
#[command(about = "Shortest paths on blocked 2D grids with A*")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path through a grid
    Solve {
        /// Grid file (TOML, JSON or YAML); uses the built-in sample if omitted
        file: Option<PathBuf>,

        /// Heuristic: signed-sum or manhattan
        #[arg(short = 'H', long = "heuristic", value_name = "NAME")]
        heuristic: Option<HeuristicKind>,

        /// Recompute the priority of open cells when a cheaper route is found
        #[arg(long = "refresh-priority")]
        refresh_priority: bool,

        /// Print the path from start to finish instead of finish to start
        #[arg(long = "start-first")]
        start_first: bool,

        /// Block an extra cell before searching (repeatable)
        #[arg(short = 'b', long = "blocked", value_name = "ROW,COL", value_parser = parse_cell)]
        blocked: Vec<Cell>,

        /// Print a JSON report
        #[arg(long = "json")]
        json: bool,

        /// Disable colored output
        #[arg(long = "no-color")]
        no_color: bool,

        /// Label rows and columns
        #[arg(short = 'c', long = "coords")]
        coords: bool,
    },

    /// Draw a grid without searching it
    Show {
        /// Grid file (TOML, JSON or YAML); uses the built-in sample if omitted
        file: Option<PathBuf>,

        /// Disable colored output
        #[arg(long = "no-color")]
        no_color: bool,

        /// Label rows and columns
        #[arg(short = 'c', long = "coords")]
        coords: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_command(cli.command) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Solve {
            file,
            heuristic,
            refresh_priority,
            start_first,
            blocked,
            json,
            no_color,
            coords,
        } => {
            let options = solve::SolveOptions {
                heuristic,
                refresh_priority,
                start_first,
                blocked,
                json,
                render: RenderOptions {
                    color: !no_color,
                    coords,
                },
            };
            solve::run_solve(file.as_deref(), &options)
        }

        Commands::Show {
            file,
            no_color,
            coords,
        } => show::run_show(
            file.as_deref(),
            &RenderOptions {
                color: !no_color,
                coords,
            },
        ),
    }
}
