//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown sample)
//! - 3: Data error (unknown vertex, invalid weight, malformed graph file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or weights (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or walking a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown sample: {name} (available: {available})")]
    UnknownSample { name: String, available: String },

    #[error("unsupported graph file {path:?} (expected .json, .toml, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown vertex: {key} (referenced by {referenced_by})")]
    UnknownVertex { key: String, referenced_by: String },

    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("negative weight {weight} on edge {from} -> {to} is not allowed here")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("parent chain of vertex {key} does not terminate")]
    ParentCycle { key: String },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a key that is not a vertex of the graph
    pub fn unknown_vertex(key: impl std::fmt::Display, referenced_by: impl Into<String>) -> Self {
        GraphError::UnknownVertex {
            key: key.to_string(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Create an error for a weight that cannot be compared
    pub fn invalid_weight(
        source: impl std::fmt::Display,
        destination: impl std::fmt::Display,
        weight: f64,
    ) -> Self {
        GraphError::InvalidWeight {
            from: source.to_string(),
            to: destination.to_string(),
            weight,
        }
    }

    /// Create an error for a negative weight where only non-negative weights are accepted
    pub fn negative_weight(
        source: impl std::fmt::Display,
        destination: impl std::fmt::Display,
        weight: f64,
    ) -> Self {
        GraphError::NegativeWeight {
            from: source.to_string(),
            to: destination.to_string(),
            weight,
        }
    }

    /// Create an error for a graph file that parsed but is not an adjacency specification
    pub fn invalid_graph_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnknownSample { .. }
            | GraphError::UnsupportedFormat { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::UnknownVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::ParentCycle { .. }
            | GraphError::EmptyGraph
            | GraphError::InvalidGraphFile { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Yaml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownSample { .. } => "unknown_sample",
            GraphError::UnsupportedFormat { .. } => "unsupported_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::ParentCycle { .. } => "parent_cycle",
            GraphError::EmptyGraph => "empty_graph",
            GraphError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
