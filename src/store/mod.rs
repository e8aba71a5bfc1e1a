//! Local list store — search history, reading list, last query.
//!
//! DESIGN
//! ======
//! Three independently keyed values in one durable namespace. Every mutation
//! rewrites the whole list: the lists are small and bounded, so a single
//! atomic overwrite buys crash consistency with no partial-edit states.
//!
//! ERROR HANDLING
//! ==============
//! Persistence here is best-effort by contract. Backend write failures are
//! logged and swallowed; malformed or absent stored data reads back as an
//! empty list. That lenient fallback is deliberate, not accidental — corrupt
//! history is never worth failing a search over.

pub mod backend;

use tracing::{debug, warn};

use self::backend::KvBackend;

pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const READING_LIST_KEY: &str = "readingList";
pub const LAST_QUERY_KEY: &str = "lastQuery";

/// Maximum retained search-history entries, most-recent-first.
pub const HISTORY_CAP: usize = 8;

/// Store over an injectable backend. UI-facing code depends on this type,
/// never on the storage medium.
pub struct LocalStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> LocalStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Record an executed query at the front of the history.
    ///
    /// Trims the query, drops any existing entry equal under case-insensitive
    /// comparison (the casing of the newest call wins), and truncates to
    /// [`HISTORY_CAP`]. A backend write failure leaves the stored list as it
    /// was.
    pub fn record_search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let mut history = self.search_history();
        let lowered = query.to_lowercase();
        history.retain(|entry| entry.to_lowercase() != lowered);
        history.insert(0, query.to_owned());
        history.truncate(HISTORY_CAP);
        self.persist_list(SEARCH_HISTORY_KEY, &history);
    }

    /// Delete the search history key entirely. Idempotent.
    pub fn clear_search_history(&self) {
        if let Err(e) = self.backend.remove(SEARCH_HISTORY_KEY) {
            warn!(error = %e, "failed to clear search history");
        }
    }

    /// Recent queries, most-recent-first. Empty on absent or malformed data.
    #[must_use]
    pub fn search_history(&self) -> Vec<String> {
        self.load_list(SEARCH_HISTORY_KEY)
    }

    /// Add a title to the reading list if not already present (exact match).
    ///
    /// Returns `true` when the title was added, so the caller can surface the
    /// confirmation; the duplicate case is a no-op.
    pub fn add_to_reading_list(&self, title: &str) -> bool {
        let mut list = self.reading_list();
        if list.iter().any(|entry| entry == title) {
            return false;
        }
        list.insert(0, title.to_owned());
        self.persist_list(READING_LIST_KEY, &list);
        true
    }

    /// Remove all exact matches of `title` from the reading list.
    pub fn remove_from_reading_list(&self, title: &str) {
        let mut list = self.reading_list();
        list.retain(|entry| entry != title);
        self.persist_list(READING_LIST_KEY, &list);
    }

    /// Saved titles, most-recently-added-first. Empty on absent or malformed
    /// data.
    #[must_use]
    pub fn reading_list(&self) -> Vec<String> {
        self.load_list(READING_LIST_KEY)
    }

    /// Persist the most recent search term for replay on next startup.
    pub fn set_last_query(&self, query: &str) {
        match serde_json::to_string(query) {
            Ok(raw) => {
                if let Err(e) = self.backend.set(LAST_QUERY_KEY, &raw) {
                    warn!(error = %e, "failed to persist last query");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize last query"),
        }
    }

    /// The most recent search term, if one was ever recorded.
    #[must_use]
    pub fn last_query(&self) -> Option<String> {
        let raw = self.backend.get(LAST_QUERY_KEY)?;
        match serde_json::from_str::<String>(&raw) {
            Ok(query) => Some(query),
            Err(e) => {
                debug!(error = %e, "stored last query unparsable; ignoring");
                None
            }
        }
    }

    fn load_list(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.backend.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                // Documented fallback: corrupt stored data reads as empty.
                debug!(key, error = %e, "stored list unparsable; treating as empty");
                Vec::new()
            }
        }
    }

    fn persist_list(&self, key: &str, list: &[String]) {
        match serde_json::to_string(list) {
            Ok(raw) => {
                if let Err(e) = self.backend.set(key, &raw) {
                    warn!(key, error = %e, "failed to persist list");
                }
            }
            Err(e) => warn!(key, error = %e, "failed to serialize list"),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
