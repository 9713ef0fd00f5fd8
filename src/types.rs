//! Domain types shared across the library
//!
//! The track schema is owned by the remote search service, so [`Track`]
//! deliberately stays schemaless: a thin wrapper over the raw JSON record
//! with accessors for the fields most services agree on. [`SearchData`] is
//! the paginated result collection, and [`RecentSearch`] is one entry of
//! the persisted recent-searches history.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single track record as returned by the search service.
///
/// Fields are owned by the remote API; this type passes them through
/// untouched and offers conveniences for the common ones.
///
/// # Examples
///
/// ```
/// use tracksearch::Track;
///
/// let track: Track =
///     serde_json::from_str(r#"{"id": 42, "title": "Aerodynamic"}"#).unwrap();
/// assert_eq!(track.id(), Some(42));
/// assert_eq!(track.title(), Some("Aerodynamic"));
/// assert_eq!(track.text("genre"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track(pub Value);

impl Track {
    /// Get a raw field of the track record
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a string field of the track record
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }

    /// Numeric track identifier, when the service provides one
    pub fn id(&self) -> Option<i64> {
        self.get("id")?.as_i64()
    }

    /// Track title, when the service provides one
    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }
}

/// Paginated search results returned by a successful request.
///
/// Both fields are optional on the wire: an absent collection decodes as
/// an empty sequence and an absent total as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchData {
    /// Matching tracks, in service order
    #[serde(default)]
    pub collection: Vec<Track>,

    /// Total number of matches before pagination
    #[serde(default)]
    pub total_results: usize,
}

impl SearchData {
    /// Whether the result collection holds no tracks
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Number of tracks in this page of results
    pub fn len(&self) -> usize {
        self.collection.len()
    }
}

/// One entry of the recent-searches history.
///
/// The timestamp is milliseconds since the Unix epoch, matching the
/// persisted JSON format.
///
/// # Examples
///
/// ```
/// use tracksearch::RecentSearch;
///
/// let entry = RecentSearch::new("daft punk");
/// assert_eq!(entry.query, "daft punk");
/// assert!(entry.recorded_at().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    /// The query string as it was searched
    pub query: String,

    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl RecentSearch {
    /// Create an entry for `query` stamped with the current time
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// The creation time as a UTC datetime
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_field_access() {
        let track: Track = serde_json::from_str(
            r#"{"id": 7, "title": "One More Time", "duration": 320000, "user": {"username": "daft"}}"#,
        )
        .unwrap();

        assert_eq!(track.id(), Some(7));
        assert_eq!(track.title(), Some("One More Time"));
        assert_eq!(track.get("duration").and_then(Value::as_i64), Some(320000));
        assert_eq!(track.text("nonexistent"), None);
        assert_eq!(track.id().is_some(), track.get("id").is_some());
    }

    #[test]
    fn test_track_serde_is_transparent() {
        let raw = r#"{"id":1,"title":"Aerodynamic"}"#;
        let track: Track = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_string(&track).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_search_data_defaults_for_absent_fields() {
        let data: SearchData = serde_json::from_str("{}").unwrap();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.total_results, 0);

        let data: SearchData =
            serde_json::from_str(r#"{"collection": [{"id": 1}], "total_results": 5}"#).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.total_results, 5);
    }

    #[test]
    fn test_recent_search_timestamps() {
        let entry = RecentSearch::new("jazz");
        assert!(entry.timestamp > 0);
        assert!(entry.recorded_at().is_some());
    }

    #[test]
    fn test_recent_search_wire_format() {
        // Millisecond integer timestamps, as persisted by earlier clients.
        let entries: Vec<RecentSearch> =
            serde_json::from_str(r#"[{"query":"jazz","timestamp":1700000000000}]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].query, "jazz");
        assert_eq!(entries[0].timestamp, 1_700_000_000_000);

        let json = serde_json::to_string(&entries).unwrap();
        assert!(json.contains(r#""timestamp":1700000000000"#));
    }
}
