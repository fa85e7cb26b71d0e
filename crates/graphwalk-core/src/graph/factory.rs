//! Graph construction from adjacency specifications

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::input::AdjacencySpec;
use crate::graph::types::{Adjacency, Graph, Neighbors};
use crate::graph::vertex::{Vertex, VertexKey};

/// Builds [`Graph`]s, checking that every referenced key is a vertex
pub struct GraphFactory;

impl GraphFactory {
    /// Build a weighted graph
    ///
    /// One vertex per outer key, one edge per inner entry, both in input
    /// order. Fails with [`GraphError::UnknownVertex`] if a destination is
    /// not itself an outer key, and with [`GraphError::InvalidWeight`] on a
    /// NaN or infinite weight.
    #[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
    pub fn from_adjacency_list<K: VertexKey>(adjacency: Adjacency<K>) -> Result<Graph<K>> {
        let mut vertices = IndexMap::with_capacity(adjacency.len());
        for key in adjacency.keys() {
            vertices.insert(key.clone(), Vertex::new(key.clone()));
        }

        let mut edges = Vec::new();
        for (source, neighbors) in &adjacency {
            for (destination, weight) in neighbors {
                if !vertices.contains_key(destination) {
                    crate::bail_unknown_vertex!(destination, format!("adjacency of {}", source));
                }
                if !weight.is_finite() {
                    return Err(GraphError::invalid_weight(source, destination, *weight));
                }
                edges.push((source.clone(), destination.clone()));
            }
        }

        tracing::debug!(edges = edges.len(), "graph_built");
        Ok(Graph::new(vertices, Arc::new(adjacency), edges))
    }

    /// Build an unweighted graph from neighbor lists
    ///
    /// Every edge gets weight 1.0; a neighbor listed twice yields one edge.
    pub fn from_neighbor_lists<K: VertexKey>(lists: IndexMap<K, Vec<K>>) -> Result<Graph<K>> {
        let adjacency = lists
            .into_iter()
            .map(|(key, neighbors)| {
                let neighbors: Neighbors<K> = neighbors.into_iter().map(|n| (n, 1.0)).collect();
                (key, neighbors)
            })
            .collect();
        Self::from_adjacency_list(adjacency)
    }

    /// Build a string-keyed graph from a deserialized specification
    pub fn from_spec(spec: AdjacencySpec) -> Result<Graph<String>> {
        match spec {
            AdjacencySpec::Unweighted(lists) => Self::from_neighbor_lists(lists),
            AdjacencySpec::Weighted(adjacency) => Self::from_adjacency_list(adjacency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn keys(graph: &Graph<&'static str>) -> Vec<&'static str> {
        graph.vertices().map(|v| *v.key()).collect()
    }

    #[test]
    fn test_vertices_follow_input_order() {
        let graph = GraphFactory::from_adjacency_list(indexmap! {
            "z" => indexmap! { "a" => 1.0 },
            "a" => indexmap! {},
            "m" => indexmap! { "z" => 2.0, "a" => 3.0 },
        })
        .unwrap();

        assert_eq!(keys(&graph), vec!["z", "a", "m"]);
        assert_eq!(
            graph.edges(),
            &[("z", "a"), ("m", "z"), ("m", "a")]
        );
    }

    #[test]
    fn test_unknown_destination_fails() {
        let err = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! { "t" => 1.0, "ghost" => 2.0 },
            "t" => indexmap! {},
        })
        .unwrap_err();

        match err {
            GraphError::UnknownVertex { key, referenced_by } => {
                assert_eq!(key, "ghost");
                assert_eq!(referenced_by, "adjacency of s");
            }
            other => panic!("expected UnknownVertex, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_weight_fails() {
        let err = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! { "t" => f64::NAN },
            "t" => indexmap! {},
        })
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn test_infinite_weight_fails() {
        let err = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! { "t" => f64::INFINITY },
            "t" => indexmap! {},
        })
        .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn test_negative_infinity_from_toml_fails() {
        let spec = AdjacencySpec::from_toml("s = { a = -inf }\na = { b = 1 }\nb = {}\n").unwrap();

        match GraphFactory::from_spec(spec).unwrap_err() {
            GraphError::InvalidWeight { from, to, weight } => {
                assert_eq!((from.as_str(), to.as_str()), ("s", "a"));
                assert_eq!(weight, f64::NEG_INFINITY);
            }
            other => panic!("expected InvalidWeight, got {other:?}"),
        }
    }

    #[test]
    fn test_neighbor_lists_get_unit_weights() {
        let graph = GraphFactory::from_neighbor_lists(indexmap! {
            "a" => vec!["b", "b", "a"],
            "b" => vec![],
        })
        .unwrap();

        let neighbors: Vec<_> = graph.neighbors(&"a").collect();
        assert_eq!(neighbors, vec![(&"b", 1.0), (&"a", 1.0)]);
        assert_eq!(graph.edges().len(), 2);
    }

    #[test]
    fn test_adjacency_is_shared_with_weight_fn() {
        use crate::graph::types::WeightFn;

        let graph = GraphFactory::from_adjacency_list(indexmap! {
            "s" => indexmap! { "t" => 4.5 },
            "t" => indexmap! {},
        })
        .unwrap();
        let weights = graph.adjacency_weights();
        let s = graph.vertex(&"s").unwrap();
        let t = graph.vertex(&"t").unwrap();

        assert_eq!(weights.weight(s, t), 4.5);
        assert!(weights.weight(t, s).is_nan());
    }

    #[test]
    fn test_empty_adjacency_builds_empty_graph() {
        let graph = GraphFactory::from_adjacency_list(Adjacency::<u32>::new()).unwrap();
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
    }
}
