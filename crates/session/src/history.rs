//! Recent-search history
//!
//! A bounded, most-recent-first list of query strings: max 10 entries,
//! deduplicated by exact string match. Held in volatile session state by
//! default; hosts that want it to survive restarts wire a
//! [`KeyValueStore`] through the session builder and the list round-trips
//! as JSON under a fixed key.

use atrium_core::{Error, Result};
use atrium_store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum entries the history retains
pub const RECENT_SEARCH_CAP: usize = 10;

/// Key the history persists under in the KV collaborator
pub const RECENT_SEARCHES_KEY: &str = "atrium.recent-searches";

/// Bounded most-recent-first query history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    entries: VecDeque<String>,
}

impl RecentSearches {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a query, deduplicating any prior occurrence of the exact
    /// same string and truncating to [`RECENT_SEARCH_CAP`]
    pub fn push(&mut self, query: &str) {
        self.entries.retain(|entry| entry != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(RECENT_SEARCH_CAP);
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no queries have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as an owned vec, most recent first
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Load persisted history, or an empty one if nothing is stored
    pub fn load(kv: &dyn KeyValueStore) -> Result<Self> {
        match kv.get(RECENT_SEARCHES_KEY)? {
            Some(raw) => {
                let history: RecentSearches = serde_json::from_str(&raw)
                    .map_err(|e| Error::Persistence(format!("corrupt search history: {e}")))?;
                Ok(history)
            }
            None => Ok(Self::new()),
        }
    }

    /// Persist the history through the KV collaborator
    pub fn save(&self, kv: &dyn KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string(self)
            .map_err(|e| Error::Persistence(format!("unserializable search history: {e}")))?;
        kv.set(RECENT_SEARCHES_KEY, &raw)
    }
}

// ============================================================================
// Tests
// ============================================================================
