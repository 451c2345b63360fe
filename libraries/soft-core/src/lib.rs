//! Soft Music Core
//!
//! Platform-agnostic domain types shared by the search client, the playback
//! deck and the search server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackKey`, `ResultEntry`, `SearchResult`
//! - **Fallback data**: `TrackCatalog`, the fixed list shown when the default
//!   search cannot reach the server
//!
//! # Example
//!
//! ```rust
//! use soft_core::{SearchResult, TrackCatalog, MAX_RESULTS};
//!
//! let result = SearchResult::from_tracks(TrackCatalog::tracks());
//! assert_eq!(result.len(), MAX_RESULTS);
//!
//! // Every materialized entry carries its own synthetic key
//! let first = result.key_at(0).unwrap();
//! assert_eq!(result.position(first), Some(0));
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod types;

pub use catalog::{TrackCatalog, CATALOG_VERSION};
pub use types::{ResultEntry, SearchResult, Track, TrackKey, DEFAULT_PREVIEW_URL, MAX_RESULTS};
