//! Configuration management for ember.
//!
//! Configuration is read from `~/.config/ember/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::aggregator::{DEFAULT_LIMIT, DEFAULT_WORKERS};
use crate::client::http::DEFAULT_BASE_URL;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Hacker News API.
    pub base_url: String,
    /// Default number of stories per load.
    pub limit: usize,
    /// Concurrent story fetches per load.
    pub workers: usize,
    /// Override for the favorites database path.
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            workers: DEFAULT_WORKERS,
            db_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/ember/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("ember").join("config.toml"))
    }

    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        format!(
            r#"# ember configuration

# Base URL of the Hacker News API
base_url = "{}"

# Default number of stories per load
limit = {}

# Concurrent story fetches per load
workers = {}

# Override the favorites database path (default: platform data dir)
# db_path = "/path/to/ember.db"
"#,
            DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_WORKERS
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
limit = 10
"#;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.limit, 10);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.workers, DEFAULT_WORKERS);
    }
}
