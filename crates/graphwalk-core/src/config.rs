//! User configuration for graphwalk
//!
//! Read from `--config PATH` when given, otherwise from `config.toml` in
//! `$GRAPHWALK_CONFIG_DIR` or `~/.config/graphwalk/`. A missing file means
//! defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{DijkstraConfig, WalkConfig, DEFAULT_PATH_SEPARATOR};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl WalkConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WalkConfig = toml::from_str(&content)?;

        if config.path_separator.is_empty() {
            return Err(GraphError::Other(format!(
                "invalid config {}: path_separator must not be empty",
                path.display()
            )));
        }

        Ok(config)
    }

    /// Load `explicit` if given (it must exist), else the default location
    /// if it exists, else defaults
    #[tracing::instrument(skip(explicit))]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "config_dir_unavailable");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "config_default");
        Self::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WalkConfig::default();
        assert_eq!(config.format, OutputFormat::Human);
        assert_eq!(config.path_separator, "->");
        assert!(!config.dijkstra.reject_negative_weights);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"json\"\n").unwrap();

        let config = WalkConfig::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.path_separator, DEFAULT_PATH_SEPARATOR);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "format = \"records\"\npath_separator = \" > \"\n\n[dijkstra]\nreject_negative_weights = true\n",
        )
        .unwrap();

        let config = WalkConfig::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Records);
        assert_eq!(config.path_separator, " > ");
        assert!(config.dijkstra.reject_negative_weights);
    }

    #[test]
    fn test_load_rejects_empty_separator() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "path_separator = \"\"\n").unwrap();

        assert!(WalkConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_unknown_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"xml\"\n").unwrap();

        let err = WalkConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_resolve_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = WalkConfig::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
