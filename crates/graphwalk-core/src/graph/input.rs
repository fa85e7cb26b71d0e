//! Adjacency specifications read from JSON, TOML or YAML documents
//!
//! The top level maps each vertex key to either a list of neighbor keys
//! (unweighted) or a table of neighbor key -> weight (weighted):
//!
//! ```json
//! { "s": { "t": 10, "y": 5 }, "t": { "x": 1 }, "x": {}, "y": { "t": 3 } }
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::types::Adjacency;

/// Deserialized adjacency specification with string keys
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdjacencySpec {
    Unweighted(IndexMap<String, Vec<String>>),
    Weighted(Adjacency<String>),
}

impl AdjacencySpec {
    pub fn is_weighted(&self) -> bool {
        matches!(self, AdjacencySpec::Weighted(_))
    }

    pub fn len(&self) -> usize {
        match self {
            AdjacencySpec::Unweighted(lists) => lists.len(),
            AdjacencySpec::Weighted(adjacency) => adjacency.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a specification, choosing the parser by file extension
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => {
                return Err(GraphError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = fs::read_to_string(path)?;
        let spec =
            parse(&content).map_err(|e| GraphError::invalid_graph_file(path, e.to_string()))?;

        if spec.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        tracing::debug!(vertices = spec.len(), weighted = spec.is_weighted(), "graph_file_loaded");
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_neighbor_lists_are_unweighted() {
        let spec = AdjacencySpec::from_json(r#"{"v": ["r"], "r": ["v"]}"#).unwrap();
        assert!(!spec.is_weighted());
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_json_weight_tables_are_weighted() {
        let spec = AdjacencySpec::from_json(r#"{"s": {"t": 6, "y": -3.5}, "t": {}, "y": {}}"#)
            .unwrap();
        match spec {
            AdjacencySpec::Weighted(adjacency) => {
                assert_eq!(adjacency["s"]["t"], 6.0);
                assert_eq!(adjacency["s"]["y"], -3.5);
                let order: Vec<_> = adjacency.keys().cloned().collect();
                assert_eq!(order, vec!["s", "t", "y"]);
            }
            other => panic!("expected weighted spec, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_weighted() {
        let spec = AdjacencySpec::from_toml("s = { t = 1, x = 2 }\nt = {}\nx = {}\n").unwrap();
        assert!(spec.is_weighted());
    }

    #[test]
    fn test_yaml_unweighted() {
        let spec = AdjacencySpec::from_yaml("a: [b]\nb: []\n").unwrap();
        assert_eq!(
            spec,
            AdjacencySpec::Unweighted(indexmap::indexmap! {
                "a".to_string() => vec!["b".to_string()],
                "b".to_string() => vec![],
            })
        );
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, r#"{"a": {"b": 2}, "b": {}}"#).unwrap();

        let spec = AdjacencySpec::load(&path).unwrap();
        assert!(spec.is_weighted());
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.csv");
        fs::write(&path, "a,b").unwrap();

        let err = AdjacencySpec::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, r#"{"a": 5}"#).unwrap();

        let err = AdjacencySpec::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::InvalidGraphFile { .. }));
    }

    #[test]
    fn test_load_rejects_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.yaml");
        fs::write(&path, "{}\n").unwrap();

        let err = AdjacencySpec::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::EmptyGraph));
    }
}
