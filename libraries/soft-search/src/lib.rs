//! Soft Music - Track Search
//!
//! Client side of the track search: validates the query typed into the search
//! box, asks the search API for matching tracks and publishes the resulting
//! state for the view.
//!
//! # Features
//!
//! - **Form validation**: trimmed queries, minimum length, blank = default query
//! - **HTTP client**: `GET <base>/tracks/search?q=` via reqwest
//! - **Fallback**: the local catalog replaces a failed default search
//! - **State snapshots**: `tokio::sync::watch` channel of `SearchSnapshot`
//! - **Stale responses**: only the newest search may publish
//!
//! # Example
//!
//! ```ignore
//! use soft_search::{SearchConfig, SearchForm, SearchGateway, TrackSearchClient};
//!
//! let config = SearchConfig::new("http://localhost:8000");
//! let client = TrackSearchClient::new(&config)?;
//! let gateway = SearchGateway::new(client, &config.default_query);
//!
//! let query = SearchForm::new(&config.default_query).validate("sunset")?;
//! gateway.search(&query).await;
//!
//! let snapshot = gateway.snapshot();
//! println!("{} ({} tracks)", snapshot.status.message(), snapshot.result.len());
//! ```

pub mod client;
pub mod error;
pub mod form;
pub mod gateway;
pub mod types;

pub use client::{decode_tracks, TrackSearch, TrackSearchClient, SEARCH_PATH};
pub use error::{Result, SearchError};
pub use form::{QueryError, SearchForm, SearchQuery, MIN_QUERY_CHARS};
pub use gateway::SearchGateway;
pub use types::{
    ResultSource, SearchConfig, SearchOutcome, SearchSnapshot, SearchStatus, DEFAULT_API_BASE,
};
