//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Default separator between keys when printing a path
pub const DEFAULT_PATH_SEPARATOR: &str = "->";

/// User configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Separator between keys in rendered paths
    #[serde(default = "default_path_separator")]
    pub path_separator: String,

    /// Dijkstra settings
    #[serde(default)]
    pub dijkstra: DijkstraConfig,
}

/// Configuration for Dijkstra runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    /// Fail on negative edge weights instead of producing unspecified estimates
    #[serde(default)]
    pub reject_negative_weights: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            path_separator: default_path_separator(),
            dijkstra: DijkstraConfig::default(),
        }
    }
}

fn default_path_separator() -> String {
    DEFAULT_PATH_SEPARATOR.to_string()
}
