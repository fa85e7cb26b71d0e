//! Path reconstruction from parent links, and serializable per-vertex reports

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::types::Graph;
use crate::graph::vertex::{Color, Vertex, VertexKey};

/// Keys from the root of `key`'s parent chain down to `key`
///
/// A vertex with no parent yields just itself. The chain may be at most
/// `|V|` long; anything longer loops (Bellman-Ford leaves such chains behind
/// when it finds a negative cycle) and fails with [`GraphError::ParentCycle`].
pub fn path_to<K: VertexKey>(graph: &Graph<K>, key: &K) -> Result<Vec<K>> {
    let mut path = vec![key.clone()];
    let mut current = graph.require(key, "path reconstruction")?;

    while let Some(parent) = &current.parent {
        if path.len() >= graph.len() {
            return Err(GraphError::ParentCycle {
                key: key.to_string(),
            });
        }
        path.push(parent.clone());
        current = graph.require(parent, "parent link")?;
    }

    path.reverse();
    Ok(path)
}

/// Reconstructed path from a root to one vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    /// Whether `to` was reached from `from`
    pub found: bool,
    pub path: Vec<String>,
    /// Number of edges on the path
    pub path_length: usize,
    /// Total weight, for shortest-path runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl PathResult {
    /// Build the path from `root` to `key` using the vertices' parent links
    ///
    /// `found` is false when the chain ends anywhere other than `root`.
    pub fn reconstruct<K: VertexKey>(graph: &Graph<K>, root: &K, key: &K) -> Result<Self> {
        let keys = path_to(graph, key)?;
        let found = keys.first() == Some(root);
        let weight = graph
            .vertex(key)
            .map(|v| v.shortest_path_estimate)
            .filter(|w| w.is_finite());

        Ok(Self {
            from: root.to_string(),
            to: key.to_string(),
            found,
            path_length: if found { keys.len() - 1 } else { 0 },
            path: if found {
                keys.iter().map(|k| k.to_string()).collect()
            } else {
                Vec::new()
            },
            weight,
        })
    }

    /// `a->b->c` style rendering
    pub fn joined(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

/// Traversal state of one vertex after a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexReport {
    pub key: String,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    pub start: u64,
    pub finish: u64,
    /// `None` while the estimate is infinite
    pub shortest_path_estimate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl<K: VertexKey> From<&Vertex<K>> for VertexReport {
    fn from(vertex: &Vertex<K>) -> Self {
        Self {
            key: vertex.key().to_string(),
            color: vertex.color(),
            depth: vertex.depth,
            start: vertex.start,
            finish: vertex.finish,
            shortest_path_estimate: Some(vertex.shortest_path_estimate)
                .filter(|e| e.is_finite()),
            parent: vertex.parent.as_ref().map(|p| p.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::{
        bellman_ford, breadth_first_search, dijkstra, prepare_graph_for_breadth_first_search,
    };
    use crate::graph::samples::sample;
    use crate::graph::GraphFactory;
    use indexmap::indexmap;

    fn s() -> String {
        "s".to_string()
    }

    #[test]
    fn test_root_path_is_itself() {
        let graph = GraphFactory::from_neighbor_lists(indexmap! { "a" => vec![] }).unwrap();
        assert_eq!(path_to(&graph, &"a").unwrap(), vec!["a"]);
    }

    #[test]
    fn test_dijkstra_path_and_weight() {
        let mut graph = GraphFactory::from_spec(sample("clrs-dijkstra").unwrap().spec()).unwrap();
        let weights = graph.adjacency_weights();
        dijkstra(&mut graph, &weights, &s()).unwrap();

        let result = PathResult::reconstruct(&graph, &s(), &"x".to_string()).unwrap();
        assert!(result.found);
        assert_eq!(result.joined("->"), "s->y->t->x");
        assert_eq!(result.path_length, 3);
        assert_eq!(result.weight, Some(9.0));
    }

    #[test]
    fn test_bfs_path_has_no_weight_until_estimates_exist() {
        let mut graph = GraphFactory::from_spec(sample("clrs-bfs").unwrap().spec()).unwrap();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &s()).unwrap();

        let result = PathResult::reconstruct(&graph, &s(), &"y".to_string()).unwrap();
        assert_eq!(result.joined("->"), "s->w->x->y");
        assert_eq!(result.weight, None);
    }

    #[test]
    fn test_unreached_vertex_is_not_found() {
        let mut graph = GraphFactory::from_neighbor_lists(indexmap! {
            "a" => vec![],
            "b" => vec!["a"],
        })
        .unwrap();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &"a").unwrap();

        let result = PathResult::reconstruct(&graph, &"a", &"b").unwrap();
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.path_length, 0);
    }

    #[test]
    fn test_negative_cycle_parent_chain_is_detected() {
        let mut graph = GraphFactory::from_spec(sample("negative-cycle").unwrap().spec()).unwrap();
        let weights = graph.adjacency_weights();
        assert!(!bellman_ford(&mut graph, &weights, &s()).unwrap());

        // s lies on the cycle, so its parent chain loops
        let err = path_to(&graph, &s()).unwrap_err();
        assert!(matches!(err, GraphError::ParentCycle { .. }));
    }

    #[test]
    fn test_vertex_report_hides_infinite_estimate() {
        let vertex = Vertex::new("q".to_string());
        let report = VertexReport::from(&vertex);
        assert_eq!(report.shortest_path_estimate, None);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["color"], "white");
        assert!(json["shortest_path_estimate"].is_null());
        assert!(json.get("parent").is_none());
    }
}
