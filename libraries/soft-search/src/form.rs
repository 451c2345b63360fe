//! Query validation performed before any search is issued

use std::fmt;
use thiserror::Error;

/// Shortest non-default query accepted by the search form
pub const MIN_QUERY_CHARS: usize = 3;

/// Reasons a raw query is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query must be at least {min} characters long (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// A validated, trimmed search query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase form used when comparing queries
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Whether this is the reserved default query
    ///
    /// Comparison is case-insensitive and ignores surrounding whitespace.
    pub fn is_default(&self, default_query: &str) -> bool {
        self.normalized() == default_query.trim().to_lowercase()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input contract of the search box
///
/// A blank submission stands for the default query and is always valid;
/// anything else must reach `min_chars` characters after trimming.
#[derive(Debug, Clone)]
pub struct SearchForm {
    default_query: String,
    min_chars: usize,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new("")
    }
}

impl SearchForm {
    pub fn new(default_query: impl Into<String>) -> Self {
        Self {
            default_query: default_query.into().trim().to_string(),
            min_chars: MIN_QUERY_CHARS,
        }
    }

    pub fn default_query(&self) -> &str {
        &self.default_query
    }

    /// Trim `raw` and check it against the form rules
    pub fn validate(&self, raw: &str) -> Result<SearchQuery, QueryError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(SearchQuery(self.default_query.clone()));
        }

        let query = SearchQuery(trimmed.to_string());
        if query.is_default(&self.default_query) {
            return Ok(query);
        }

        let actual = trimmed.chars().count();
        if actual < self.min_chars {
            return Err(QueryError::TooShort {
                min: self.min_chars,
                actual,
            });
        }

        Ok(query)
    }
}
