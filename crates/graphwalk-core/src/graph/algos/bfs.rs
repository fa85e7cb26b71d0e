use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::types::Graph;
use crate::graph::vertex::{Color, VertexKey};

/// Breadth-first search from `start`
///
/// Expects a graph reset with
/// [`prepare_graph_for_breadth_first_search`](super::shared::prepare_graph_for_breadth_first_search).
/// Afterwards every vertex reachable from `start` is black with `depth` equal
/// to its edge-count distance and a parent chain that is a shortest path
/// back to `start`. Unreachable vertices stay white with no depth.
#[tracing::instrument(skip(graph), fields(start = %start, vertices = graph.len()))]
pub fn breadth_first_search<K: VertexKey>(graph: &mut Graph<K>, start: &K) -> Result<()> {
    {
        let root = graph.require_mut(start, "breadth-first search start")?;
        root.advance_color(Color::Grey);
        root.depth = Some(0);
        root.parent = None;
    }

    let mut queue = VecDeque::from([start.clone()]);
    let mut discovered = 1usize;

    while let Some(current) = queue.pop_front() {
        let depth = graph.require(&current, "breadth-first queue")?.depth;
        let neighbors: Vec<K> = graph.neighbors(&current).map(|(k, _)| k.clone()).collect();

        for neighbor in neighbors {
            let vertex = graph.require_mut(&neighbor, "breadth-first neighbor")?;
            if vertex.color() == Color::White {
                vertex.advance_color(Color::Grey);
                vertex.depth = depth.map(|d| d + 1);
                vertex.parent = Some(current.clone());
                queue.push_back(neighbor);
                discovered += 1;
            }
        }

        graph
            .require_mut(&current, "breadth-first queue")?
            .advance_color(Color::Black);
    }

    tracing::debug!(discovered, "breadth_first_search_done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::algos::shared::prepare_graph_for_breadth_first_search;
    use crate::graph::samples::sample;
    use crate::graph::GraphFactory;
    use indexmap::indexmap;

    fn clrs() -> Graph<String> {
        GraphFactory::from_spec(sample("clrs-bfs").unwrap().spec()).unwrap()
    }

    fn depth_of(graph: &Graph<String>, key: &str) -> Option<usize> {
        graph.vertex(&key.to_string()).unwrap().depth
    }

    #[test]
    fn test_clrs_depths() {
        let mut graph = clrs();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &"s".to_string()).unwrap();

        let expected = [
            ("s", 0),
            ("r", 1),
            ("w", 1),
            ("v", 2),
            ("t", 2),
            ("x", 2),
            ("u", 3),
            ("y", 3),
        ];
        for (key, depth) in expected {
            assert_eq!(depth_of(&graph, key), Some(depth), "depth of {key}");
        }
        assert!(graph.vertices().all(|v| v.color() == Color::Black));
    }

    #[test]
    fn test_parents_follow_discovery() {
        let mut graph = clrs();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &"s".to_string()).unwrap();

        let parent = |key: &str| graph.vertex(&key.to_string()).unwrap().parent.clone();
        assert_eq!(parent("s"), None);
        assert_eq!(parent("v"), Some("r".to_string()));
        // w lists x before t, so x is discovered from w
        assert_eq!(parent("x"), Some("w".to_string()));
        assert_eq!(parent("u"), Some("x".to_string()));
    }

    #[test]
    fn test_unreachable_vertices_stay_white() {
        let mut graph = GraphFactory::from_neighbor_lists(indexmap! {
            1 => vec![2],
            2 => vec![],
            3 => vec![1],
        })
        .unwrap();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &1).unwrap();

        let three = graph.vertex(&3).unwrap();
        assert_eq!(three.color(), Color::White);
        assert_eq!(three.depth, None);
        assert_eq!(graph.vertex(&2).unwrap().depth, Some(1));
    }

    #[test]
    fn test_self_loop_does_not_rediscover_start() {
        let mut graph = GraphFactory::from_neighbor_lists(indexmap! {
            "a" => vec!["a", "b"],
            "b" => vec!["b"],
        })
        .unwrap();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &"a").unwrap();

        assert_eq!(graph.vertex(&"a").unwrap().parent, None);
        assert_eq!(graph.vertex(&"a").unwrap().depth, Some(0));
        assert_eq!(graph.vertex(&"b").unwrap().depth, Some(1));
    }

    #[test]
    fn test_rerun_after_reset_is_identical() {
        let mut graph = clrs();
        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &"s".to_string()).unwrap();
        let first: Vec<_> = graph.vertices().cloned().collect();

        prepare_graph_for_breadth_first_search(&mut graph);
        breadth_first_search(&mut graph, &"s".to_string()).unwrap();
        let second: Vec<_> = graph.vertices().cloned().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_start_fails() {
        let mut graph = clrs();
        prepare_graph_for_breadth_first_search(&mut graph);
        let err = breadth_first_search(&mut graph, &"nope".to_string()).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex { .. }));
    }
}
