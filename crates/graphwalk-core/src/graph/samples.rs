//! Built-in sample graphs
//!
//! Small textbook graphs used as fixed inputs for each algorithm.

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::input::AdjacencySpec;

/// A named built-in adjacency specification
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    /// Suggested source vertex
    pub source: &'static str,
    build: fn() -> AdjacencySpec,
}

impl Sample {
    pub fn spec(&self) -> AdjacencySpec {
        (self.build)()
    }
}

/// All samples, in listing order
pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "clrs-bfs",
        description: "undirected 8-vertex graph for breadth- and depth-first search",
        source: "s",
        build: clrs_bfs,
    },
    Sample {
        name: "clrs-dijkstra",
        description: "directed graph with non-negative weights",
        source: "s",
        build: clrs_dijkstra,
    },
    Sample {
        name: "clrs-bellman-ford",
        description: "directed graph with negative weights and no negative cycle",
        source: "s",
        build: clrs_bellman_ford,
    },
    Sample {
        name: "negative-cycle",
        description: "directed graph with a negative cycle reachable from s",
        source: "s",
        build: negative_cycle,
    },
];

/// Find a sample by name
pub fn sample(name: &str) -> Result<&'static Sample> {
    SAMPLES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| GraphError::UnknownSample {
            name: name.to_string(),
            available: SAMPLES
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn unweighted(entries: &[(&str, &[&str])]) -> AdjacencySpec {
    AdjacencySpec::Unweighted(
        entries
            .iter()
            .map(|(key, neighbors)| {
                (
                    key.to_string(),
                    neighbors.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect(),
    )
}

fn weighted(entries: &[(&str, &[(&str, f64)])]) -> AdjacencySpec {
    AdjacencySpec::Weighted(
        entries
            .iter()
            .map(|(key, neighbors)| {
                let neighbors: IndexMap<String, f64> = neighbors
                    .iter()
                    .map(|(n, w)| (n.to_string(), *w))
                    .collect();
                (key.to_string(), neighbors)
            })
            .collect(),
    )
}

fn clrs_bfs() -> AdjacencySpec {
    unweighted(&[
        ("v", &["r"]),
        ("r", &["v", "s"]),
        ("s", &["r", "w"]),
        ("w", &["s", "x", "t"]),
        ("x", &["w", "t", "u", "y"]),
        ("t", &["w", "x", "u"]),
        ("u", &["t", "x", "y"]),
        ("y", &["x", "u"]),
    ])
}

fn clrs_dijkstra() -> AdjacencySpec {
    weighted(&[
        ("s", &[("t", 10.0), ("y", 5.0)]),
        ("t", &[("x", 1.0), ("y", 2.0)]),
        ("x", &[("z", 4.0)]),
        ("y", &[("t", 3.0), ("x", 9.0), ("z", 2.0)]),
        ("z", &[("s", 7.0), ("x", 6.0)]),
    ])
}

fn clrs_bellman_ford() -> AdjacencySpec {
    weighted(&[
        ("s", &[("t", 6.0), ("y", 7.0)]),
        ("t", &[("x", 5.0), ("y", 8.0), ("z", -4.0)]),
        ("x", &[("t", -2.0)]),
        ("y", &[("x", -3.0), ("z", 9.0)]),
        ("z", &[("s", 2.0), ("x", 7.0)]),
    ])
}

fn negative_cycle() -> AdjacencySpec {
    weighted(&[
        ("s", &[("t", 6.0), ("y", 7.0)]),
        ("t", &[("x", 5.0), ("y", 8.0), ("z", -4.0)]),
        ("x", &[("t", -2.0)]),
        ("y", &[("x", -3.0), ("z", 9.0)]),
        ("z", &[("s", -100.0), ("x", 7.0)]),
    ])
}
