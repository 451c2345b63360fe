//! Soft Server Library
//!
//! Track search service answering `GET /tracks/search?q=` for the music home
//! view, backed by the built-in catalog or the iTunes Search API.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod sources;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::{ServerConfig, SourceKind};
pub use error::{Result, ServerError};
pub use sources::{CatalogSource, ItunesSource, TrackSource};
pub use state::AppState;
