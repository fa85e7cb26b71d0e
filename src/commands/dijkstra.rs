//! `graphwalk dijkstra` - single-source shortest paths, non-negative weights

use crate::cli::DijkstraArgs;
use crate::commands::dispatch::macros::trace_command;
use crate::commands::dispatch::CommandContext;
use crate::commands::load::{load_graph, LoadedGraph};
use crate::commands::report::{self, format_weight, reconstruct_paths, Report};
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{dijkstra_with_options, DijkstraOptions};

/// Execute the dijkstra command
pub fn execute(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
    let LoadedGraph { mut graph, source } = load_graph(&args.graph)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let options = DijkstraOptions {
        reject_negative_weights: args.reject_negative_weights
            || ctx.config.dijkstra.reject_negative_weights,
    };
    let weights = graph.adjacency_weights();
    let order = dijkstra_with_options(&mut graph, &weights, &source, options)?;
    trace_command!(ctx.cli, ctx.start, "dijkstra");

    let paths = reconstruct_paths(&graph, &source, &order)?;

    match ctx.format {
        OutputFormat::Human => {
            for path in &paths {
                match path.weight.filter(|_| path.found) {
                    Some(weight) => println!(
                        "A shortest path to vertex {} from {} is {} with weight {}.",
                        path.to,
                        path.from,
                        path.joined(ctx.path_separator()),
                        format_weight(weight)
                    ),
                    None => println!("Vertex {} is not reachable from {}.", path.to, path.from),
                }
            }
        }
        OutputFormat::Json => {
            let report = Report::new("dijkstra", &graph, &source)
                .with_paths(paths)
                .with_order(order);
            report::print_json(&report)?;
        }
        OutputFormat::Records => {
            let report = Report::new("dijkstra", &graph, &source).with_paths(paths);
            report::print_records(&report, ctx.path_separator());
        }
    }

    Ok(())
}
