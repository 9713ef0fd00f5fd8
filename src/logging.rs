//! Logging setup for the tracksearch library
//!
//! Thin wrapper around the tracing ecosystem, driven by the
//! [`LoggingConfig`] section of the main configuration.

use crate::config::LoggingConfig;
use crate::{Result, SearchError};
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the global logger with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = Level::from_str(&config.level).map_err(|e| {
        SearchError::validation(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    let env_filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap())
        .add_directive("h2=warn".parse().unwrap());

    let fmt_layer = match config.format.as_str() {
        "json" => fmt::layer().json().boxed(),
        "compact" => fmt::layer().compact().boxed(),
        _ => fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| SearchError::validation(format!("Failed to initialize logger: {}", e)))?;

    tracing::debug!("Logger initialized with level: {}", config.level);
    Ok(())
}

/// Initialize the logger with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

/// Initialize a quiet logger for tests
pub fn init_test_logging() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        format: "compact".to_string(),
    };

    // Ignore errors if already initialized
    let _ = init_logging(&config);
}
