//! TrackSearch Library
//!
//! Client-side music search for the TrackSearch applications.
//! This library provides a debounced search session against a remote
//! track search service, with observable loading/error/result state,
//! and a bounded, deduplicated recent-searches history that persists
//! between runs.

pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod history;
pub mod logging;
pub mod session;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use client::SearchClient;
pub use config::{ApiConfig, HistoryConfig, LoggingConfig, SearchConfig};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::{ErrorCategory, Result, SearchError};
pub use history::{SearchHistory, MAX_RECENT_SEARCHES};
pub use logging::{init_default_logging, init_logging, init_test_logging};
pub use session::{SearchSession, SearchState, DEFAULT_SEARCH_LIMIT};
pub use storage::{open_store, FileHistoryStore, HistoryStore, NullHistoryStore};
pub use types::{RecentSearch, SearchData, Track};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version info as a formatted string
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that main types are exported
        let _: Result<()> = Ok(());
        let _config = SearchConfig::default();
        let _state = SearchState::default();
    }

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(info.contains("tracksearch"));
        assert!(info.contains("v"));
    }
}
