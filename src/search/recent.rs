use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::search::filters::FilterSet;

/// How many searches are kept on disk.
pub const RETAIN_LIMIT: usize = 10;
/// How many searches `load`/`save` hand back for display.
pub const DISPLAY_LIMIT: usize = 5;

const STORE_FILE: &str = "recent_searches.json";

/// A persisted snapshot of one executed search. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub search_term: String,
    pub filters: FilterSet,
    pub results_count: usize,
    pub timestamp: String,
}

impl SearchRecord {
    pub fn new(search_term: impl Into<String>, filters: FilterSet, results_count: usize) -> Self {
        Self {
            search_term: search_term.into(),
            filters,
            results_count,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// File-backed list of recent searches, most-recent-first, deduplicated by
/// search term.
///
/// There is no concurrent writer; reads and writes are plain synchronous
/// file I/O. A missing or corrupt file is an empty history, never an error.
#[derive(Debug)]
pub struct RecentSearchStore {
    path: PathBuf,
}

impl RecentSearchStore {
    /// Store at the platform data directory (falls back to the working
    /// directory when the platform reports none).
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("rental-scout").join(STORE_FILE),
        }
    }

    /// Store at an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The most recent searches, at most [`DISPLAY_LIMIT`].
    pub fn load(&self) -> Vec<SearchRecord> {
        let mut records = self.read_all();
        records.truncate(DISPLAY_LIMIT);
        records
    }

    /// Prepends a record, drops any older entry with the same search term,
    /// truncates to [`RETAIN_LIMIT`] and persists. Returns the display list.
    pub fn save(&self, record: SearchRecord) -> Vec<SearchRecord> {
        let mut records = self.read_all();
        records.retain(|r| r.search_term != record.search_term);
        records.insert(0, record);
        records.truncate(RETAIN_LIMIT);
        self.write_all(&records);
        records.truncate(DISPLAY_LIMIT);
        records
    }

    fn read_all(&self) -> Vec<SearchRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("No recent searches at {}: {err}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<SearchRecord>>(&raw) {
            Ok(mut records) => {
                records.truncate(RETAIN_LIMIT);
                records
            }
            Err(err) => {
                warn!(
                    "Corrupt recent searches at {}, starting over: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn write_all(&self, records: &[SearchRecord]) {
        let json = match serde_json::to_string_pretty(records) {
            Ok(json) => json,
            Err(err) => {
                warn!("Failed to encode recent searches: {err}");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("Failed to create {}: {err}", parent.display());
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, json) {
            warn!("Failed to persist recent searches: {err}");
        }
    }
}

impl Default for RecentSearchStore {
    fn default() -> Self {
        Self::new()
    }
}
