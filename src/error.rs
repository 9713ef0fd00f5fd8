//! Error handling for the tracksearch library

use std::fmt;
use thiserror::Error;

/// Result type alias for tracksearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for tracksearch operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),

    /// The search service answered with an explicit failure
    #[error("Search API error: {message}")]
    Api { message: String },

    /// Network connectivity or response shape errors
    #[error("Network error: {message}")]
    Network { message: String },

    /// History storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl SearchError {
    /// Create a search API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The most specific message available for display to users.
    ///
    /// Server-supplied messages are preferred over transport error text;
    /// everything else falls back to the error's display form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message } => message.clone(),
            Self::Network { message } => message.clone(),
            Self::Http(e) => e.to_string(),
            other => other.to_string(),
        }
    }

    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Network { .. })
    }

    /// Get error category for logging/metrics
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) | Self::Storage { .. } => ErrorCategory::Storage,
            Self::Http(_) | Self::Network { .. } => ErrorCategory::Network,
            Self::Json(_) | Self::Yaml(_) => ErrorCategory::Serialization,
            Self::Url(_) => ErrorCategory::Configuration,
            Self::Api { .. } => ErrorCategory::Api,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Generic(_) => ErrorCategory::Generic,
        }
    }
}

/// Error categories for metrics and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Network,
    Api,
    Storage,
    Serialization,
    Configuration,
    Validation,
    Generic,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Api => write!(f, "api"),
            Self::Storage => write!(f, "storage"),
            Self::Serialization => write!(f, "serialization"),
            Self::Configuration => write!(f, "configuration"),
            Self::Validation => write!(f, "validation"),
            Self::Generic => write!(f, "generic"),
        }
    }
}
