//! Pagination helpers for the time-off listing
//!
//! Personio pages with `limit`/`offset`, where `offset` is a page number.
//! `offset=0` and `offset=1` return the same page, so page `n` (0-indexed)
//! is always requested as `offset = n + 1`.

use serde::Deserialize;

/// Records requested per page
pub const PAGE_LIMIT: usize = 200;

/// Position in the page loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 0-based page index
    pub page: usize,
    /// Records per page
    pub limit: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self::first()
    }
}

impl PageParams {
    /// The first page of a listing
    pub fn first() -> Self {
        Self {
            page: 0,
            limit: PAGE_LIMIT,
        }
    }

    /// The page after this one
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    /// Value sent as the `offset` query parameter
    pub fn offset(&self) -> usize {
        self.page + 1
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset().to_string()),
        ]
    }
}

/// Response metadata for a time-off page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMetadata {
    /// Total number of records across all pages
    #[serde(default)]
    pub total_elements: usize,

    /// Page number as reported by the API
    #[serde(default)]
    pub current_page: usize,

    /// Total number of pages
    #[serde(default)]
    pub total_pages: usize,
}

impl PageMetadata {
    /// Whether `page` (0-based) is the last one to fetch.
    ///
    /// A listing with zero pages ends after the first request.
    pub fn is_last_page(&self, page: usize) -> bool {
        page + 1 >= self.total_pages
    }
}
