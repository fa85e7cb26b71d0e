//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a WalkConfig,
    /// `--format` if given, otherwise the configured default
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a WalkConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Separator between keys in rendered paths
    pub fn path_separator(&self) -> &str {
        &self.config.path_separator
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Textbook graph algorithms: bfs, dfs, dijkstra, bellman-ford.");
        println!();
        println!("Run `graphwalk --help` for usage information.");
        Ok(())
    }
}
