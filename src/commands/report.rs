//! Shared JSON and records rendering for algorithm runs
//!
//! Each algorithm command prints its own human sentences; the machine formats
//! all go through [`Report`].

use serde::Serialize;

use graphwalk_core::error::Result;
use graphwalk_core::format::escape_record_value;
use graphwalk_core::graph::{Graph, PathResult, VertexReport};

/// Result of one algorithm run over one graph
#[derive(Debug, Serialize)]
pub struct Report {
    pub algorithm: &'static str,
    pub source: String,
    /// Bellman-Ford only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<bool>,
    /// Dijkstra only: keys in finalization order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
    pub vertices: Vec<VertexReport>,
    pub paths: Vec<PathResult>,
}

impl Report {
    pub fn new(algorithm: &'static str, graph: &Graph<String>, source: &str) -> Self {
        Self {
            algorithm,
            source: source.to_string(),
            negative_cycle: None,
            order: None,
            vertices: graph.vertices().map(VertexReport::from).collect(),
            paths: Vec::new(),
        }
    }

    pub fn with_paths(mut self, paths: Vec<PathResult>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_order(mut self, order: Vec<String>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_negative_cycle(mut self, negative_cycle: bool) -> Self {
        self.negative_cycle = Some(negative_cycle);
        self
    }

    fn path_for(&self, key: &str) -> Option<&PathResult> {
        self.paths.iter().find(|p| p.to == key && p.found)
    }
}

/// Paths from `source` to each of `keys`, in that order
pub fn reconstruct_paths<'a>(
    graph: &Graph<String>,
    source: &str,
    keys: impl IntoIterator<Item = &'a String>,
) -> Result<Vec<PathResult>> {
    let root = source.to_string();
    keys.into_iter()
        .map(|key| PathResult::reconstruct(graph, &root, key))
        .collect()
}

/// Render a weight without a trailing `.0` for whole numbers
pub fn format_weight(weight: f64) -> String {
    format!("{}", weight)
}

pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Header line, then one `V` line per vertex
pub fn print_records(report: &Report, separator: &str) {
    let mut header = format!(
        "H graphwalk=1 records=1 algorithm={} source={} vertices={}",
        report.algorithm,
        escape_record_value(&report.source),
        report.vertices.len()
    );
    if let Some(negative_cycle) = report.negative_cycle {
        header.push_str(&format!(" negative_cycle={}", negative_cycle));
    }
    println!("{}", header);

    for vertex in &report.vertices {
        println!("{}", vertex_record(report, vertex, separator));
    }
}

fn vertex_record(report: &Report, vertex: &VertexReport, separator: &str) -> String {
    let dash = || "-".to_string();
    let depth = vertex.depth.map(|d| d.to_string()).unwrap_or_else(dash);
    let estimate = vertex
        .shortest_path_estimate
        .map(format_weight)
        .unwrap_or_else(dash);
    let parent = vertex
        .parent
        .as_deref()
        .map(escape_record_value)
        .unwrap_or_else(dash);
    let path = report
        .path_for(&vertex.key)
        .map(|p| escape_record_value(&p.joined(separator)))
        .unwrap_or_else(dash);

    format!(
        "V {} color={} depth={} start={} finish={} estimate={} parent={} path={}",
        escape_record_value(&vertex.key),
        vertex.color,
        depth,
        vertex.start,
        vertex.finish,
        estimate,
        parent,
        path
    )
}
