//! Search orchestration and observable session state

use crate::client::SearchClient;
use crate::config::SearchConfig;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::history::SearchHistory;
use crate::storage::{open_store, HistoryStore};
use crate::types::{RecentSearch, SearchData, Track};
use crate::Result;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Result page size used when a debounced caller does not pick one
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Observable state of a search session
///
/// A snapshot of this struct tells a caller everything it needs to render
/// the session: the current query, the last results, whether a request is
/// in flight and the last error, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Query text as last set by the caller
    pub query: String,
    /// Tracks from the most recent successful search
    pub results: Vec<Track>,
    /// Total number of matches reported by the service
    pub total_results: usize,
    /// Whether a search request is currently in flight
    pub loading: bool,
    /// Message from the most recent failed search
    pub error: Option<String>,
    /// Whether any search has completed since the last reset
    pub has_searched: bool,
}

impl SearchState {
    /// Clear results and any error, as after an empty-query search
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.total_results = 0;
        self.has_searched = false;
        self.error = None;
    }

    /// Restore the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the last search produced any tracks
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Whether a search ran and came back with nothing
    pub fn is_empty(&self) -> bool {
        self.has_searched && self.results.is_empty()
    }

    fn set_results(&mut self, data: SearchData) {
        self.results = data.collection;
        self.total_results = data.total_results;
        self.has_searched = true;
    }
}

/// Orchestrates music searches against a remote service
///
/// A session owns the HTTP client, the recent-searches history and one
/// [`SearchState`]. Search failures are stored into the state for
/// observers and also returned to the caller; history failures never
/// surface at all.
pub struct SearchSession {
    client: SearchClient,
    history: SearchHistory,
    state: Mutex<SearchState>,
    debouncer: Debouncer,
}

impl SearchSession {
    /// Create a session from configuration
    ///
    /// Opens the history store described by the config, falling back to
    /// a non-persistent one when storage is unavailable.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let store = open_store(&config.history);
        Self::with_store(config, store)
    }

    /// Create a session with an explicit history store
    pub fn with_store(config: &SearchConfig, store: Box<dyn HistoryStore>) -> Result<Self> {
        config.validate()?;
        let client = SearchClient::new(&config.api)?;
        debug!("Search session ready for {}", client.base_url());

        Ok(Self {
            client,
            history: SearchHistory::with_max_entries(store, config.history.max_entries),
            state: Mutex::new(SearchState::default()),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
        })
    }

    /// Snapshot of the current session state
    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    /// Set the query text without searching
    pub fn set_query<S: Into<String>>(&self, query: S) {
        self.state.lock().query = query.into();
    }

    /// Restore the session state to its initial values
    pub fn reset(&self) {
        self.state.lock().reset();
    }

    /// Run a search and update the session state
    ///
    /// An empty or whitespace-only query clears the current results and
    /// returns `Ok(None)` without touching the network. On success the
    /// results land in the state and the trimmed query is recorded in
    /// the recent-searches history. On failure the error message lands
    /// in the state and the error is returned; prior results stay put.
    /// The loading flag is cleared on every exit path.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracksearch::{NullHistoryStore, SearchConfig, SearchSession};
    ///
    /// # tokio_test::block_on(async {
    /// let session =
    ///     SearchSession::with_store(&SearchConfig::default(), Box::new(NullHistoryStore))
    ///         .unwrap();
    /// let outcome = session.search("   ", 20, 0).await.unwrap();
    /// assert!(outcome.is_none());
    /// # });
    /// ```
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Option<SearchData>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            debug!("Empty query, clearing results");
            self.state.lock().clear_results();
            return Ok(None);
        }

        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }
        let _guard = LoadingGuard { state: &self.state };

        match self.client.search(trimmed, limit, offset).await {
            Ok(data) => {
                self.state.lock().set_results(data.clone());
                self.history.record(trimmed);
                info!("Search for {:?} returned {} tracks", trimmed, data.len());
                Ok(Some(data))
            }
            Err(e) => {
                warn!("Search for {:?} failed ({}): {}", trimmed, e.category(), e);
                self.state.lock().error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Run a search after the debounce window has settled
    ///
    /// Rapid calls within the window collapse to the last one; superseded
    /// calls return `Ok(None)` without searching. The surviving call runs
    /// [`search`](Self::search) with the given or default limit and
    /// offset 0.
    pub async fn debounced_search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Option<SearchData>> {
        let ticket = self.debouncer.arm();
        if !self.debouncer.settle(ticket).await {
            debug!("Superseded debounced search for {:?}", query);
            return Ok(None);
        }

        self.search(query, limit.unwrap_or(DEFAULT_SEARCH_LIMIT), 0)
            .await
    }

    /// Recent searches, most recent first
    pub fn recent_searches(&self) -> Vec<RecentSearch> {
        self.history.load()
    }

    /// Whether any recent searches are stored
    pub fn has_recent_searches(&self) -> bool {
        !self.history.is_empty()
    }

    /// Remove one query from the recent searches
    pub fn remove_recent_search(&self, query: &str) {
        self.history.remove(query);
    }

    /// Clear all recent searches
    pub fn clear_recent_searches(&self) {
        self.history.clear();
    }
}

/// Clears the loading flag when the search path exits, on every path
struct LoadingGuard<'a> {
    state: &'a Mutex<SearchState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NullHistoryStore;
    use serde_json::json;

    fn session() -> SearchSession {
        SearchSession::with_store(&SearchConfig::default(), Box::new(NullHistoryStore)).unwrap()
    }

    fn track(id: i64, title: &str) -> Track {
        Track(json!({"id": id, "title": title}))
    }

    #[test]
    fn test_state_defaults() {
        let state = SearchState::default();
        assert_eq!(state.query, "");
        assert!(state.results.is_empty());
        assert_eq!(state.total_results, 0);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert!(!state.has_searched);
    }

    #[test]
    fn test_state_clear_results() {
        let mut state = SearchState {
            query: "jazz".to_string(),
            results: vec![track(1, "Take Five")],
            total_results: 1,
            loading: false,
            error: Some("boom".to_string()),
            has_searched: true,
        };

        state.clear_results();
        assert!(state.results.is_empty());
        assert_eq!(state.total_results, 0);
        assert!(!state.has_searched);
        assert_eq!(state.error, None);
        // The query text is left alone.
        assert_eq!(state.query, "jazz");
    }

    #[test]
    fn test_state_emptiness_getters() {
        let mut state = SearchState::default();
        assert!(!state.has_results());
        assert!(!state.is_empty());

        state.set_results(SearchData {
            collection: vec![track(1, "Take Five")],
            total_results: 1,
        });
        assert!(state.has_results());
        assert!(!state.is_empty());

        state.set_results(SearchData::default());
        assert!(!state.has_results());
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_query_and_reset() {
        let session = session();
        session.set_query("daft punk");
        assert_eq!(session.state().query, "daft punk");

        session.reset();
        assert_eq!(session.state(), SearchState::default());
    }

    #[tokio::test]
    async fn test_empty_query_is_a_no_op() {
        let session = session();
        session.set_query("  ");

        let result = session.search("  ", DEFAULT_SEARCH_LIMIT, 0).await.unwrap();
        assert!(result.is_none());

        let state = session.state();
        assert!(state.results.is_empty());
        assert!(!state.has_searched);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_empty_query_clears_previous_error() {
        let session = session();
        session.state.lock().error = Some("boom".to_string());

        session.search("", DEFAULT_SEARCH_LIMIT, 0).await.unwrap();
        assert_eq!(session.state().error, None);
    }

    #[test]
    fn test_session_rejects_invalid_config() {
        let mut config = SearchConfig::default();
        config.history.max_entries = 0;
        assert!(SearchSession::with_store(&config, Box::new(NullHistoryStore)).is_err());
    }
}
