//! Resolve `--sample` / `--graph` / `--source` into a graph ready to walk

use std::time::Instant;

use crate::cli::GraphArgs;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{samples, AdjacencySpec, Graph, GraphFactory};
use graphwalk_core::{bail_usage, trace_time};

/// A built graph together with the vertex the walk starts from
pub struct LoadedGraph {
    pub graph: Graph<String>,
    pub source: String,
}

/// Build the graph named by `args` and check that the source vertex exists
pub fn load_graph(args: &GraphArgs) -> Result<LoadedGraph> {
    let start = Instant::now();

    let (spec, suggested_source) = match (&args.sample, &args.graph) {
        (Some(name), _) => {
            let sample = samples::sample(name)?;
            (sample.spec(), Some(sample.source))
        }
        (None, Some(path)) => (AdjacencySpec::load(path)?, None),
        (None, None) => bail_usage!("one of --sample or --graph is required"),
    };

    let source = match (&args.source, suggested_source) {
        (Some(source), _) => source.clone(),
        (None, Some(source)) => source.to_string(),
        (None, None) => bail_usage!("--source is required with --graph"),
    };

    let graph = GraphFactory::from_spec(spec)?;
    graph.require(&source, "--source")?;

    trace_time!(start, "load_graph", vertices = graph.len());
    Ok(LoadedGraph { graph, source })
}
