//! Persistence backends for the recent-searches history

use crate::config::HistoryConfig;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the history file inside the data directory
const HISTORY_FILE_NAME: &str = "recent_searches.json";

/// Backing store for serialized history payloads
pub trait HistoryStore: Send + Sync {
    /// Read the stored payload, if any
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored payload
    fn write(&self, payload: &str) -> Result<()>;

    /// Remove the stored payload
    fn delete(&self) -> Result<()>;
}

/// File-backed store keeping the history as a JSON document
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Create a store rooted at the given data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(HISTORY_FILE_NAME),
        }
    }

    /// Path of the underlying history file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistoryStore {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        debug!("Wrote history to {:?}", self.path);
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Store that keeps nothing; used when persistence is disabled
pub struct NullHistoryStore;

impl HistoryStore for NullHistoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _payload: &str) -> Result<()> {
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        Ok(())
    }
}

/// Open the history store described by the configuration
///
/// Falls back to a no-op store when persistence is disabled or no data
/// directory can be resolved.
pub fn open_store(config: &HistoryConfig) -> Box<dyn HistoryStore> {
    if !config.enabled {
        info!("History persistence disabled");
        return Box::new(NullHistoryStore);
    }

    match resolve_data_dir(config) {
        Some(dir) => {
            debug!("Using history data directory: {:?}", dir);
            Box::new(FileHistoryStore::new(dir))
        }
        None => {
            warn!("No data directory available, history will not persist");
            Box::new(NullHistoryStore)
        }
    }
}

fn resolve_data_dir(config: &HistoryConfig) -> Option<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Some(dir.clone());
    }
    dirs::data_local_dir().map(|dir| dir.join("tracksearch"))
}
