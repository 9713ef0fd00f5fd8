//! Bounded, deduplicated log of past search queries

use crate::storage::HistoryStore;
use crate::types::RecentSearch;
use tracing::{debug, warn};

/// Maximum number of recent searches kept by default
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Most-recent-first log of past queries backed by a [`HistoryStore`]
///
/// Entries are unique by exact query string. Recording an already-known
/// query moves it to the front with a fresh timestamp. Storage failures
/// never surface to callers; they degrade to an empty log or a skipped
/// save and are logged.
pub struct SearchHistory {
    store: Box<dyn HistoryStore>,
    max_entries: usize,
}

impl SearchHistory {
    /// Create a history with the default entry cap
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        Self::with_max_entries(store, MAX_RECENT_SEARCHES)
    }

    /// Create a history keeping at most `max_entries` entries
    pub fn with_max_entries(store: Box<dyn HistoryStore>, max_entries: usize) -> Self {
        Self { store, max_entries }
    }

    /// Load all entries, most recent first
    ///
    /// A missing, unreadable or corrupt payload yields an empty list.
    pub fn load(&self) -> Vec<RecentSearch> {
        let payload = match self.store.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read recent searches: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to parse recent searches, starting fresh: {}", e);
                Vec::new()
            }
        }
    }

    /// Record a query at the front of the log
    ///
    /// Whitespace-only queries are ignored. The query is stored verbatim;
    /// callers trim before recording.
    pub fn record(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        let mut entries = self.load();
        entries.retain(|e| e.query != query);
        entries.insert(0, RecentSearch::new(query));
        entries.truncate(self.max_entries);

        self.persist(&entries);
        debug!("Recorded recent search: {}", query);
    }

    /// Remove all entries matching the query exactly
    pub fn remove(&self, query: &str) {
        let mut entries = self.load();
        entries.retain(|e| e.query != query);
        self.persist(&entries);
    }

    /// Delete the entire log
    pub fn clear(&self) {
        if let Err(e) = self.store.delete() {
            warn!("Failed to clear recent searches: {}", e);
        }
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    fn persist(&self, entries: &[RecentSearch]) {
        let payload = match serde_json::to_string(entries) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize recent searches: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.write(&payload) {
            warn!("Failed to save recent searches: {}", e);
        }
    }
}
