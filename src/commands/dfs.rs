//! `graphwalk dfs` - depth-first search from a source vertex
//!
//! Only the vertices reachable from the source are explored; the rest keep
//! start and finish times of 0.

use crate::cli::GraphArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::load::{load_graph, LoadedGraph};
use crate::commands::report::{self, reconstruct_paths, Report};
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{depth_first_search, prepare_graph_for_depth_first_search, DfsClock};

/// Execute the dfs command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let LoadedGraph { mut graph, source } = load_graph(args)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    prepare_graph_for_depth_first_search(&mut graph);
    let mut clock = DfsClock::new();
    depth_first_search(&mut graph, &source, &mut clock)?;
    trace_command!(ctx.cli, ctx.start, "depth_first_search");
    tracing::debug!(ticks = clock.time(), "dfs_clock");

    let keys: Vec<String> = graph.vertices().map(|v| v.key().clone()).collect();
    let paths = reconstruct_paths(&graph, &source, &keys)?;

    match ctx.format {
        OutputFormat::Human => {
            for (vertex, path) in graph.vertices().zip(&paths) {
                if path.found {
                    println!(
                        "Vertex {} was discovered at {} and finished at {} via {}.",
                        path.to,
                        vertex.start,
                        vertex.finish,
                        path.joined(ctx.path_separator())
                    );
                } else {
                    println!("Vertex {} is not reachable from {}.", path.to, path.from);
                }
            }
        }
        OutputFormat::Json => {
            report::print_json(&Report::new("dfs", &graph, &source).with_paths(paths))?;
        }
        OutputFormat::Records => {
            let report = Report::new("dfs", &graph, &source).with_paths(paths);
            report::print_records(&report, ctx.path_separator());
        }
    }

    Ok(())
}
