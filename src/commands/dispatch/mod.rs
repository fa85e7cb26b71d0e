//! Command dispatch logic for graphwalk

use std::time::Instant;

use crate::cli::Cli;
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;

mod command;
mod commands;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &WalkConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
