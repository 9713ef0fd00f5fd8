//! Configuration types for the tracksearch library

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search service settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Recent-searches history settings
    #[serde(default)]
    pub history: HistoryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            history: HistoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Search service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search service
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds; unset leaves the transport default in place
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

/// Recent-searches history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Whether to persist recent searches
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum number of entries to keep in the history
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Directory for the history file; unset uses the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
            data_dir: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format (json, text, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        // Try YAML first, then JSON
        match serde_yaml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(_) => {
                let config = serde_json::from_str(&content)?;
                Ok(config)
            }
        }
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build a configuration from environment variables
    ///
    /// Recognized variables: `TRACKSEARCH_API_BASE`, `TRACKSEARCH_DATA_DIR`
    /// and `TRACKSEARCH_LOG_LEVEL`. Anything unset keeps its default.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base) = std::env::var("TRACKSEARCH_API_BASE") {
            config.api.base_url = Url::parse(&base)?;
        }
        if let Ok(dir) = std::env::var("TRACKSEARCH_DATA_DIR") {
            config.history.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(level) = std::env::var("TRACKSEARCH_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.scheme() != "http" && self.api.base_url.scheme() != "https" {
            return Err(crate::SearchError::validation(
                "Search service URL must use http or https scheme",
            ));
        }

        if self.history.enabled && self.history.max_entries == 0 {
            return Err(crate::SearchError::validation(
                "History max_entries must be greater than 0",
            ));
        }

        Ok(())
    }
}

// Default value functions
fn default_true() -> bool {
    true
}
fn default_max_entries() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}
fn default_base_url() -> Url {
    Url::parse("http://localhost:5000").unwrap()
}
