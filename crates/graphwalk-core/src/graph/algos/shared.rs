//! Initialization and relaxation shared by the traversal and
//! shortest-path algorithms

use crate::error::{GraphError, Result};
use crate::graph::types::{Graph, WeightFn};
use crate::graph::vertex::VertexKey;

/// Reset every vertex for a single-source shortest-path run
///
/// Every estimate becomes infinite and every parent is cleared, then the
/// source gets estimate 0.
pub fn initialize_single_source<K: VertexKey>(graph: &mut Graph<K>, source: &K) -> Result<()> {
    graph.require(source, "single-source initialization")?;

    for vertex in graph.vertices_mut() {
        vertex.shortest_path_estimate = f64::INFINITY;
        vertex.parent = None;
    }

    graph.require_mut(source, "single-source initialization")?
        .shortest_path_estimate = 0.0;
    Ok(())
}

/// Try to improve `destination` through the edge from `source`
///
/// Returns `true` if the estimate (and parent) of `destination` changed.
/// Ties leave everything as is. A NaN or infinite weight is an error.
pub fn relax<K: VertexKey, W: WeightFn<K> + ?Sized>(
    graph: &mut Graph<K>,
    source: &K,
    destination: &K,
    weight_fn: &W,
) -> Result<bool> {
    let src = graph.require(source, "relaxed edge")?;
    let dst = graph.require(destination, "relaxed edge")?;

    let weight = weight_fn.weight(src, dst);
    if !weight.is_finite() {
        return Err(GraphError::invalid_weight(source, destination, weight));
    }

    // An unreached source cannot improve anything, and inf + -inf is NaN
    if !src.is_reached() {
        return Ok(false);
    }

    let candidate = src.shortest_path_estimate + weight;
    if candidate >= dst.shortest_path_estimate {
        return Ok(false);
    }

    let dst = graph.require_mut(destination, "relaxed edge")?;
    dst.shortest_path_estimate = candidate;
    dst.parent = Some(source.clone());
    tracing::trace!(from = %source, to = %destination, estimate = candidate, "relaxed");
    Ok(true)
}

/// Reset color, parent and depth before a breadth-first search
pub fn prepare_graph_for_breadth_first_search<K: VertexKey>(graph: &mut Graph<K>) {
    for vertex in graph.vertices_mut() {
        vertex.reset_color();
        vertex.parent = None;
        vertex.depth = None;
    }
}

/// Reset color, parent and timestamps before a depth-first search
pub fn prepare_graph_for_depth_first_search<K: VertexKey>(graph: &mut Graph<K>) {
    for vertex in graph.vertices_mut() {
        vertex.reset_color();
        vertex.parent = None;
        vertex.start = 0;
        vertex.finish = 0;
    }
}
