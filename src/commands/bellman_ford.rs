//! `graphwalk bellman-ford` - shortest paths with negative-cycle detection
//!
//! A reachable negative cycle is reported, not treated as an error. Paths
//! are only printed when there is none, since parent links may loop.

use crate::cli::GraphArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::load::{load_graph, LoadedGraph};
use crate::commands::report::{self, format_weight, reconstruct_paths, Report};
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::bellman_ford;

/// Execute the bellman-ford command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let LoadedGraph { mut graph, source } = load_graph(args)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let weights = graph.adjacency_weights();
    let no_negative_cycle = bellman_ford(&mut graph, &weights, &source)?;
    trace_command!(ctx.cli, ctx.start, "bellman_ford");

    let paths = if no_negative_cycle {
        let reached: Vec<String> = graph
            .vertices()
            .filter(|v| v.is_reached())
            .map(|v| v.key().clone())
            .collect();
        reconstruct_paths(&graph, &source, &reached)?
    } else {
        tracing::info!(source = %source, "negative_cycle_detected");
        Vec::new()
    };

    match ctx.format {
        OutputFormat::Human => {
            if no_negative_cycle {
                println!(
                    "There is not a negative-weight cycle that is reachable from vertex {}.",
                    source
                );
            } else {
                println!(
                    "There is a negative-weight cycle that is reachable from vertex {}.",
                    source
                );
            }
            for path in &paths {
                println!(
                    "A shortest path to vertex {} from {} is {} with weight {}.",
                    path.to,
                    path.from,
                    path.joined(ctx.path_separator()),
                    format_weight(path.weight.unwrap_or_default())
                );
            }
        }
        OutputFormat::Json | OutputFormat::Records => {
            let report = Report::new("bellman-ford", &graph, &source)
                .with_paths(paths)
                .with_negative_cycle(!no_negative_cycle);
            if ctx.format == OutputFormat::Json {
                report::print_json(&report)?;
            } else {
                report::print_records(&report, ctx.path_separator());
            }
        }
    }

    Ok(())
}
