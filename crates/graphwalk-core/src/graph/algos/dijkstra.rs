use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{initialize_single_source, relax};
use crate::graph::heap::EstimateHeap;
use crate::graph::types::{Graph, WeightFn};
use crate::graph::vertex::VertexKey;

/// Options for [`dijkstra_with_options`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraOptions {
    /// Fail with [`GraphError::NegativeWeight`] instead of running on a
    /// negative edge weight
    pub reject_negative_weights: bool,
}

/// Dijkstra's single-source shortest paths with default options
///
/// See [`dijkstra_with_options`].
pub fn dijkstra<K: VertexKey, W: WeightFn<K> + ?Sized>(
    graph: &mut Graph<K>,
    weight_fn: &W,
    source: &K,
) -> Result<Vec<K>> {
    dijkstra_with_options(graph, weight_fn, source, DijkstraOptions::default())
}

/// Dijkstra's single-source shortest paths
///
/// Returns every key of the graph: first the vertices reachable from
/// `source` in the order their estimates were finalized (non-decreasing by
/// estimate), then the unreachable ones in input order. Unreachable vertices
/// keep an infinite estimate and no parent.
///
/// Edge weights must be non-negative. With negative weights the estimates
/// are unspecified unless `reject_negative_weights` is set, in which case
/// the first negative weight met is an error.
#[tracing::instrument(skip(graph, weight_fn, options), fields(source = %source, vertices = graph.len(), reject_negative_weights = options.reject_negative_weights))]
pub fn dijkstra_with_options<K: VertexKey, W: WeightFn<K> + ?Sized>(
    graph: &mut Graph<K>,
    weight_fn: &W,
    source: &K,
    options: DijkstraOptions,
) -> Result<Vec<K>> {
    initialize_single_source(graph, source)?;

    let mut heap = EstimateHeap::new();
    heap.push(source.clone(), 0.0);
    let mut finalized = Vec::with_capacity(graph.len());

    while let Some(entry) = heap.pop_current(graph) {
        let current = entry.key;
        tracing::trace!(vertex = %current, estimate = entry.estimate, "finalized");

        let neighbors: Vec<K> = graph.neighbors(&current).map(|(k, _)| k.clone()).collect();
        for neighbor in neighbors {
            if options.reject_negative_weights {
                check_non_negative(graph, weight_fn, &current, &neighbor)?;
            }
            if heap.is_finalized(&neighbor) {
                continue;
            }
            if relax(graph, &current, &neighbor, weight_fn)? {
                let estimate = graph.require(&neighbor, "relaxed edge")?.shortest_path_estimate;
                heap.push(neighbor, estimate);
            }
        }

        finalized.push(current);
    }

    let reached = finalized.len();
    let unreachable: Vec<K> = graph
        .vertices()
        .map(|v| v.key())
        .filter(|key| !heap.is_finalized(key))
        .cloned()
        .collect();
    finalized.extend(unreachable);

    tracing::debug!(
        reached,
        unreachable = finalized.len() - reached,
        stale_skipped = heap.stale_skipped(),
        "dijkstra_done"
    );
    Ok(finalized)
}

fn check_non_negative<K: VertexKey, W: WeightFn<K> + ?Sized>(
    graph: &Graph<K>,
    weight_fn: &W,
    source: &K,
    destination: &K,
) -> Result<()> {
    let weight = weight_fn.weight(
        graph.require(source, "relaxed edge")?,
        graph.require(destination, "relaxed edge")?,
    );
    if weight < 0.0 {
        return Err(GraphError::negative_weight(source, destination, weight));
    }
    Ok(())
}
