//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graphwalk_core::format::OutputFormat;
pub use args::{DijkstraArgs, GraphArgs};
use parse::parse_output_format;

/// Graphwalk - run textbook graph algorithms and print the paths they find
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records (default from config, else human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphwalk_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: $GRAPHWALK_CONFIG_DIR/config.toml or ~/.config/graphwalk/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search: fewest-edge paths from the source
    Bfs(GraphArgs),

    /// Depth-first search: discovery and finish times from the source
    Dfs(GraphArgs),

    /// Dijkstra: shortest paths for non-negative edge weights
    Dijkstra(DijkstraArgs),

    /// Bellman-Ford: shortest paths with negative-cycle detection
    BellmanFord(GraphArgs),

    /// List the built-in sample graphs
    Samples,
}
