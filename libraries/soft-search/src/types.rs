//! Search client configuration and published search state

use crate::error::SearchError;
use serde::Serialize;
use soft_core::SearchResult;
use std::sync::Arc;
use std::time::Duration;

/// Base URL used when none is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Search client configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search API base URL (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Reserved query whose failed lookups fall back to the local catalog
    pub default_query: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            default_query: String::new(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl SearchConfig {
    /// Create a configuration for `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_default_query(mut self, default_query: impl Into<String>) -> Self {
        self.default_query = default_query.into();
        self
    }
}

/// Status line shown above the result tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchStatus {
    /// Nothing searched yet
    Idle,
    /// A request is in flight
    Searching,
    /// Tracks are displayed (remote or fallback)
    Loaded,
    /// The search succeeded with zero matches
    Empty,
    /// The search failed and nothing could be substituted
    Failed { message: String },
}

impl SearchStatus {
    pub const IDLE_MESSAGE: &'static str = "Run a search to see a list of recommendations.";
    pub const SEARCHING_MESSAGE: &'static str = "Searching for tracks…";
    pub const EMPTY_MESSAGE: &'static str = "Nothing found. Try rephrase your search.";
    pub const FAILED_MESSAGE: &'static str =
        "Failed to retrieve data from the server. Please check the API and try again.";

    pub(crate) fn failed() -> Self {
        Self::Failed {
            message: Self::FAILED_MESSAGE.to_string(),
        }
    }

    /// User-facing text (empty once tracks are shown)
    pub fn message(&self) -> &str {
        match self {
            Self::Idle => Self::IDLE_MESSAGE,
            Self::Searching => Self::SEARCHING_MESSAGE,
            Self::Loaded => "",
            Self::Empty => Self::EMPTY_MESSAGE,
            Self::Failed { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching)
    }
}

/// Where the displayed result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Remote,
    Fallback,
}

/// Immutable view of the search state, replaced wholesale per transition
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    /// Generation of the search that produced this snapshot (0 before any)
    pub generation: u64,
    pub status: SearchStatus,
    pub result: Arc<SearchResult>,
    /// None until a result has been resolved
    pub source: Option<ResultSource>,
}

impl Default for SearchSnapshot {
    fn default() -> Self {
        Self {
            generation: 0,
            status: SearchStatus::Idle,
            result: Arc::new(SearchResult::empty()),
            source: None,
        }
    }
}

/// What a single `SearchGateway::search` call ended with
#[derive(Debug)]
pub enum SearchOutcome {
    /// Tracks were published
    Loaded { count: usize, source: ResultSource },
    /// The search succeeded with zero matches
    Empty,
    /// The search failed and the error status was published
    Failed(SearchError),
    /// A newer search started before this one resolved; nothing was published
    Superseded,
}

impl SearchOutcome {
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}
