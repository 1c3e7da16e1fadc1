//! Search session state.

use encore_catalog::{SearchRepository, SearchSources};
use std::sync::Arc;
use tracing::debug;

/// The current search query and the paging sources serving it.
///
/// Sources are created per query: typing a new query discards the old
/// sources along with their loaded pages.
pub struct SearchSession {
    repository: Arc<dyn SearchRepository>,
    country_code: String,
    current: Option<(String, SearchSources)>,
}

impl SearchSession {
    /// Creates a session with no query.
    pub fn new(repository: Arc<dyn SearchRepository>, country_code: impl Into<String>) -> Self {
        Self {
            repository,
            country_code: country_code.into(),
            current: None,
        }
    }

    /// The active query, trimmed.
    pub fn query(&self) -> Option<&str> {
        self.current.as_ref().map(|(query, _)| query.as_str())
    }

    /// Sources for the active query.
    pub fn sources(&self) -> Option<&SearchSources> {
        self.current.as_ref().map(|(_, sources)| sources)
    }

    /// Sets the query.
    ///
    /// Returns true if the sources changed: a different query gets fresh
    /// sources, a blank one clears them, and the same query keeps them.
    pub fn set_query(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            debug!("Search query cleared");
            return self.current.take().is_some();
        }
        if self.query() == Some(query) {
            return false;
        }

        debug!(query, "New search query");
        let sources = SearchSources::create(self.repository.as_ref(), query, &self.country_code);
        self.current = Some((query.to_string(), sources));
        true
    }

    /// Drops the query and its sources.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
