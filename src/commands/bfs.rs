//! `graphwalk bfs` - breadth-first search from a source vertex

use crate::cli::GraphArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::load::{load_graph, LoadedGraph};
use crate::commands::report::{self, reconstruct_paths, Report};
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{breadth_first_search, prepare_graph_for_breadth_first_search};

/// Execute the bfs command
pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let LoadedGraph { mut graph, source } = load_graph(args)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    prepare_graph_for_breadth_first_search(&mut graph);
    breadth_first_search(&mut graph, &source)?;
    trace_command!(ctx.cli, ctx.start, "breadth_first_search");

    let keys: Vec<String> = graph.vertices().map(|v| v.key().clone()).collect();
    let paths = reconstruct_paths(&graph, &source, &keys)?;

    match ctx.format {
        OutputFormat::Human => {
            for path in &paths {
                if path.found {
                    println!(
                        "An optimal path to vertex {} from {} is {}.",
                        path.to,
                        path.from,
                        path.joined(ctx.path_separator())
                    );
                } else {
                    println!("Vertex {} is not reachable from {}.", path.to, path.from);
                }
            }
        }
        OutputFormat::Json => {
            report::print_json(&Report::new("bfs", &graph, &source).with_paths(paths))?;
        }
        OutputFormat::Records => {
            let report = Report::new("bfs", &graph, &source).with_paths(paths);
            report::print_records(&report, ctx.path_separator());
        }
    }

    Ok(())
}
