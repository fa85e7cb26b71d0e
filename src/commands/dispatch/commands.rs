//! Command implementations for all graphwalk commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{bellman_ford, bfs, dfs, dijkstra, samples};
use graphwalk_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => bfs::execute(ctx, args),
            Commands::Dfs(args) => dfs::execute(ctx, args),
            Commands::Dijkstra(args) => dijkstra::execute(ctx, args),
            Commands::BellmanFord(args) => bellman_ford::execute(ctx, args),
            Commands::Samples => samples::execute(ctx),
        }
    }
}
