//! Paging value types.
//!
//! These are shared by the paging engine in `encore-fetch` and the
//! resource-specific adapters in `encore-catalog`. The engine owns the state
//! machine; this module only owns the values flowing through it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ErrorKind;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ============================================================================
// Page Key
// ============================================================================

/// Offset/limit pair identifying one page of a remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageKey {
    /// Index of the first item of the page.
    pub offset: u32,
    /// Maximum number of items requested.
    pub limit: u32,
}

impl PageKey {
    /// Creates a key.
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// The key every paging source starts from.
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Offset just past the range this key covers.
    pub fn end_offset(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.offset, self.end_offset())
    }
}

// ============================================================================
// Page
// ============================================================================

/// One loaded slice of a remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The key this page was loaded with.
    pub key: PageKey,
    /// Items in remote order.
    pub items: Vec<T>,
    /// Offset of the following page, `None` at end of data.
    pub next_offset: Option<u32>,
}

impl<T> Page<T> {
    /// Builds a page, deciding whether more data follows.
    ///
    /// An explicit `has_more` from the remote side wins. Without one, a page
    /// holding fewer items than requested ends pagination; a full page always
    /// permits one more request, even if it turns out empty. A zero limit
    /// can never advance the offset, so it always ends pagination.
    pub fn new(key: PageKey, items: Vec<T>, has_more: Option<bool>) -> Self {
        let more =
            key.limit > 0 && has_more.unwrap_or_else(|| items.len() >= key.limit as usize);
        Self {
            key,
            next_offset: more.then(|| key.end_offset()),
            items,
        }
    }

    /// Builds a page that ends pagination.
    pub fn last(key: PageKey, items: Vec<T>) -> Self {
        Self::new(key, items, Some(false))
    }

    /// Returns true if no further page exists.
    pub fn is_end(&self) -> bool {
        self.next_offset.is_none()
    }

    /// Number of items in the page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maps every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            key: self.key,
            items: self.items.into_iter().map(f).collect(),
            next_offset: self.next_offset,
        }
    }
}

// ============================================================================
// Load Result
// ============================================================================

/// Outcome of loading one page. Never both data and error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult<T> {
    /// The page loaded.
    Page(Page<T>),
    /// The page failed with a classified cause; the same key may be retried.
    Error(ErrorKind),
}

impl<T> LoadResult<T> {
    /// Returns true if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Maps the items of a loaded page.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> LoadResult<U> {
        match self {
            Self::Page(page) => LoadResult::Page(page.map(f)),
            Self::Error(kind) => LoadResult::Error(kind),
        }
    }
}

// ============================================================================
// Paging Config
// ============================================================================

/// Paging policy shared by every paging source a repository creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Items per page after the first.
    pub page_size: u32,
    /// Items requested by the first page.
    pub initial_load_size: u32,
    /// How close to the end of loaded data an access must be to trigger the
    /// next fetch.
    pub prefetch_distance: u32,
}

impl PagingConfig {
    /// Creates a config where every page, including the first, has `page_size`
    /// items and the prefetch distance equals one page.
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size,
            initial_load_size: page_size,
            prefetch_distance: page_size,
        }
    }

    /// Sets the prefetch distance.
    pub fn prefetch_distance(mut self, distance: u32) -> Self {
        self.prefetch_distance = distance;
        self
    }

    /// Sets the initial load size.
    pub fn initial_load_size(mut self, size: u32) -> Self {
        self.initial_load_size = size;
        self
    }

    /// Key of the first page.
    pub fn first_key(&self) -> PageKey {
        PageKey::first(self.initial_load_size)
    }

    /// Key of the page starting at `offset`.
    pub fn key_at(&self, offset: u32) -> PageKey {
        PageKey::new(offset, self.page_size)
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_page_ends_pagination() {
        let page = Page::new(PageKey::new(20, 20), vec![1, 2, 3, 4, 5], None);
        assert!(page.is_end());
    }

    #[test]
    fn test_full_page_permits_next() {
        let page = Page::new(PageKey::new(0, 3), vec![1, 2, 3], None);
        assert_eq!(page.next_offset, Some(3));
    }

    #[test]
    fn test_explicit_signal_wins_over_count() {
        let empty: Page<u8> = Page::new(PageKey::new(40, 20), vec![], Some(true));
        assert_eq!(empty.next_offset, Some(60));

        let full = Page::new(PageKey::new(0, 2), vec![1, 2], Some(false));
        assert!(full.is_end());
    }

    #[test]
    fn test_zero_limit_ends_pagination() {
        let empty: Page<u8> = Page::new(PageKey::new(0, 0), vec![], None);
        assert!(empty.is_end());

        let claimed_more: Page<u8> = Page::new(PageKey::new(20, 0), vec![], Some(true));
        assert!(claimed_more.is_end());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(PageKey::new(0, 2), vec![1, 2], None).map(|n| n.to_string());
        assert_eq!(page.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(page.next_offset, Some(2));
    }

    #[test]
    fn test_default_config() {
        let config = PagingConfig::default();
        assert_eq!(config.first_key(), PageKey::new(0, 20));
        assert_eq!(config.key_at(40), PageKey::new(40, 20));
    }
}
