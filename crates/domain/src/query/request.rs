//! Validated query shape.
//!
//! Raw page and limit values arrive as signed integers from the outside
//! world. They are checked once here so the engine only ever sees a page
//! number of at least 1 and a positive limit.

use std::fmt::Write as _;

use thiserror::Error;

use crate::item::Item;

// =============================================================================
// QueryError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(i64),

    #[error("limit must be at least 1, got {0}")]
    InvalidLimit(i64),
}

impl QueryError {
    /// Name of the offending query parameter.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidPage(_) => "page",
            Self::InvalidLimit(_) => "limit",
        }
    }
}

// =============================================================================
// PageRequest
// =============================================================================

/// A 1-based page number and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// # Errors
    ///
    /// Returns [`QueryError`] when `page < 1` or `limit < 1`.
    pub fn new(page: i64, limit: i64) -> Result<Self, QueryError> {
        let page = u64::try_from(page)
            .ok()
            .filter(|value| *value >= 1)
            .ok_or(QueryError::InvalidPage(page))?;
        let limit = u64::try_from(limit)
            .ok()
            .filter(|value| *value >= 1)
            .ok_or(QueryError::InvalidLimit(limit))?;

        Ok(Self { page, limit })
    }

    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Caps the page size at `max_limit`, leaving smaller limits untouched.
    #[must_use]
    pub fn with_limit_cap(self, max_limit: u64) -> Self {
        Self {
            limit: self.limit.min(max_limit.max(1)),
            ..self
        }
    }

    /// Half-open `[start, end)` window of this page over the ordered result.
    ///
    /// Saturates instead of overflowing, so an absurd page number simply
    /// lands past the end of any collection.
    #[must_use]
    pub fn window(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.limit);
        let end = start.saturating_add(self.limit);

        (saturate(start), saturate(end))
    }
}

fn saturate(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

// =============================================================================
// SearchTerm
// =============================================================================

/// Substring filter over item values (case-insensitive) and decimal ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchTerm {
    raw: String,
    lowered: String,
    numeric: bool,
}

impl SearchTerm {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        let numeric = !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit());

        Self {
            raw,
            lowered,
            numeric,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Tests an item against the term.
    ///
    /// `search_key` is the item's lowercase value. `id_buffer` is scratch
    /// space reused across calls to render ids without allocating.
    pub(crate) fn matches(&self, item: &Item, search_key: &str, id_buffer: &mut String) -> bool {
        if self.raw.is_empty() || search_key.contains(self.lowered.as_str()) {
            return true;
        }

        // An id renders as digits only, so any other character rules it out.
        if !self.numeric {
            return false;
        }

        id_buffer.clear();
        write!(id_buffer, "{}", item.id).ok();
        id_buffer.contains(self.raw.as_str())
    }
}

// =============================================================================
// Query
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    page: PageRequest,
    search: SearchTerm,
}

impl Query {
    /// # Errors
    ///
    /// Returns [`QueryError`] when `page < 1` or `limit < 1`.
    pub fn new(page: i64, limit: i64, search: impl Into<String>) -> Result<Self, QueryError> {
        Ok(Self::from_parts(
            PageRequest::new(page, limit)?,
            SearchTerm::new(search),
        ))
    }

    #[must_use]
    pub const fn from_parts(page: PageRequest, search: SearchTerm) -> Self {
        Self { page, search }
    }

    #[must_use]
    pub const fn page(&self) -> &PageRequest {
        &self.page
    }

    #[must_use]
    pub const fn search(&self) -> &SearchTerm {
        &self.search
    }
}

// =============================================================================
// Tests
// =============================================================================
