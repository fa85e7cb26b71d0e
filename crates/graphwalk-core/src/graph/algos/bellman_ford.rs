use crate::error::Result;
use crate::graph::algos::shared::{initialize_single_source, relax};
use crate::graph::types::{Graph, WeightFn};
use crate::graph::vertex::VertexKey;

/// Bellman-Ford single-source shortest paths
///
/// Relaxes every edge `|V| - 1` times, then makes one more pass. Returns
/// `false` if that pass can still improve an estimate, meaning a negative
/// cycle is reachable from `source`; `true` otherwise, with final estimates
/// and parents written to the vertices.
#[tracing::instrument(skip(graph, weight_fn), fields(source = %source, vertices = graph.len(), edges = graph.edges().len()))]
pub fn bellman_ford<K: VertexKey, W: WeightFn<K> + ?Sized>(
    graph: &mut Graph<K>,
    weight_fn: &W,
    source: &K,
) -> Result<bool> {
    initialize_single_source(graph, source)?;

    let edges = graph.edges().to_vec();
    for pass in 1..graph.len() {
        let mut changed = 0usize;
        for (from, to) in &edges {
            if relax(graph, from, to, weight_fn)? {
                changed += 1;
            }
        }
        tracing::trace!(pass, changed, "bellman_ford_pass");
    }

    for (from, to) in &edges {
        if admits_improvement(graph, from, to, weight_fn)? {
            tracing::debug!(from = %from, to = %to, "negative_cycle_detected");
            return Ok(false);
        }
    }

    tracing::debug!("bellman_ford_converged");
    Ok(true)
}

/// Whether relaxing `from -> to` would lower the estimate of `to`, without
/// changing anything
fn admits_improvement<K: VertexKey, W: WeightFn<K> + ?Sized>(
    graph: &Graph<K>,
    from: &K,
    to: &K,
    weight_fn: &W,
) -> Result<bool> {
    let source = graph.require(from, "edge list")?;
    let destination = graph.require(to, "edge list")?;
    let weight = weight_fn.weight(source, destination);
    if !weight.is_finite() {
        return Err(crate::error::GraphError::invalid_weight(from, to, weight));
    }
    Ok(source.is_reached()
        && source.shortest_path_estimate + weight < destination.shortest_path_estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::samples::sample;
    use crate::graph::vertex::Vertex;
    use crate::graph::GraphFactory;
    use indexmap::indexmap;

    fn from_sample(name: &str) -> Graph<String> {
        GraphFactory::from_spec(sample(name).unwrap().spec()).unwrap()
    }

    fn estimate(graph: &Graph<String>, key: &str) -> f64 {
        graph.vertex(&key.to_string()).unwrap().shortest_path_estimate
    }

    #[test]
    fn test_clrs_example_has_no_negative_cycle() {
        let mut graph = from_sample("clrs-bellman-ford");
        let weights = graph.adjacency_weights();
        assert!(bellman_ford(&mut graph, &weights, &"s".to_string()).unwrap());

        assert_eq!(estimate(&graph, "s"), 0.0);
        assert_eq!(estimate(&graph, "t"), 2.0);
        assert_eq!(estimate(&graph, "x"), 4.0);
        assert_eq!(estimate(&graph, "y"), 7.0);
        assert_eq!(estimate(&graph, "z"), -2.0);

        let parent = |key: &str| graph.vertex(&key.to_string()).unwrap().parent.clone();
        assert_eq!(parent("t"), Some("x".to_string()));
        assert_eq!(parent("x"), Some("y".to_string()));
        assert_eq!(parent("z"), Some("t".to_string()));
    }

    #[test]
    fn test_reachable_negative_cycle_is_reported() {
        let mut graph = from_sample("negative-cycle");
        let weights = graph.adjacency_weights();
        assert!(!bellman_ford(&mut graph, &weights, &"s".to_string()).unwrap());
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        let mut graph = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! { "a" => 1.0 },
            "a" => indexmap! {},
            "p" => indexmap! { "q" => -5.0 },
            "q" => indexmap! { "p" => -5.0 },
        })
        .unwrap();
        let weights = graph.adjacency_weights();
        assert!(bellman_ford(&mut graph, &weights, &"s").unwrap());

        assert_eq!(graph.vertex(&"a").unwrap().shortest_path_estimate, 1.0);
        assert!(graph.vertex(&"p").unwrap().shortest_path_estimate.is_infinite());
    }

    #[test]
    fn test_negative_self_loop_is_a_cycle() {
        let mut graph = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! { "s" => -1.0 },
        })
        .unwrap();
        let weights = graph.adjacency_weights();
        assert!(!bellman_ford(&mut graph, &weights, &"s").unwrap());
    }

    #[test]
    fn test_single_vertex_without_edges() {
        let mut graph = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! {},
        })
        .unwrap();
        let weights = graph.adjacency_weights();
        assert!(bellman_ford(&mut graph, &weights, &"s").unwrap());
        assert_eq!(graph.vertex(&"s").unwrap().shortest_path_estimate, 0.0);
    }

    #[test]
    fn test_agrees_with_dijkstra_on_non_negative_weights() {
        let mut bf = from_sample("clrs-dijkstra");
        let mut dj = from_sample("clrs-dijkstra");
        let weights = bf.adjacency_weights();

        assert!(bellman_ford(&mut bf, &weights, &"s".to_string()).unwrap());
        crate::graph::algos::dijkstra(&mut dj, &weights, &"s".to_string()).unwrap();

        for v in bf.vertices() {
            assert_eq!(
                v.shortest_path_estimate,
                dj.vertex(v.key()).unwrap().shortest_path_estimate,
                "estimate of {}",
                v.key()
            );
        }
    }

    #[test]
    fn test_infinite_weight_fails() {
        let mut graph = from_sample("clrs-bellman-ford");
        let unbounded = |_: &Vertex<String>, _: &Vertex<String>| f64::NEG_INFINITY;

        let err = bellman_ford(&mut graph, &unbounded, &"s".to_string()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn test_nan_weight_fails() {
        let mut graph = from_sample("clrs-bellman-ford");
        let broken = |_: &Vertex<String>, _: &Vertex<String>| f64::NAN;
        let err = bellman_ford(&mut graph, &broken, &"s".to_string()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }
}
