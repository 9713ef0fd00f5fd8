//! HTTP client for the remote music search service

use crate::config::ApiConfig;
use crate::types::SearchData;
use crate::{Result, SearchError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Record type requested from the search endpoint
const TRACKS_SEARCH_TYPE: &str = "tracks";

/// Client for the `/api/v1/search` endpoint
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client for the configured search service
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL of the search service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a track search against the remote service
    ///
    /// The query is sent as given; callers trim it first. A reachable
    /// server that signals failure maps to [`SearchError::Api`] carrying
    /// the server message, everything else to a transport-level error.
    pub async fn search(&self, query: &str, limit: usize, offset: usize) -> Result<SearchData> {
        let url = format!("{}/api/v1/search", self.base_url);
        let params = SearchQuery {
            q: query,
            limit,
            offset,
            kind: TRACKS_SEARCH_TYPE,
        };

        debug!("Searching for {:?} via {}", query, url);
        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(envelope) = serde_json::from_str::<SearchEnvelope>(&body) {
                if let Some(message) = envelope.message {
                    return Err(SearchError::api(message));
                }
            }
            return Err(SearchError::network(format!(
                "Failed to search music: HTTP {}",
                status
            )));
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| SearchError::network(format!("Failed to parse search response: {}", e)))?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "Search failed".to_string());
            return Err(SearchError::api(message));
        }

        let data = envelope.data.unwrap_or_default();
        debug!(
            "Search returned {} of {} tracks",
            data.len(),
            data.total_results
        );
        Ok(data)
    }
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    limit: usize,
    offset: usize,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<SearchData>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ApiConfig::default();
        let client = SearchClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = ApiConfig::default();
        config.base_url = url::Url::parse("http://music.example.com/api/").unwrap();
        let client = SearchClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://music.example.com/api");
    }

    #[test]
    fn test_client_with_timeout() {
        let mut config = ApiConfig::default();
        config.timeout_seconds = Some(5);
        assert!(SearchClient::new(&config).is_ok());
    }

    #[test]
    fn test_query_serialization() {
        let params = SearchQuery {
            q: "daft punk",
            limit: 20,
            offset: 0,
            kind: TRACKS_SEARCH_TYPE,
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["q"], "daft punk");
        assert_eq!(value["limit"], 20);
        assert_eq!(value["offset"], 0);
        assert_eq!(value["type"], "tracks");
    }

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{
            "success": true,
            "data": {
                "collection": [{"id": 1, "title": "One More Time"}],
                "total_results": 1
            }
        }"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.total_results, 1);
    }

    #[test]
    fn test_envelope_failure_message() {
        let json = r#"{"success": false, "message": "Rate limited"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Rate limited"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_without_optional_fields() {
        let envelope: SearchEnvelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.message.is_none());
    }
}
