//! Error types for the home view

use soft_playback::PlaybackError;
use soft_search::QueryError;
use thiserror::Error;

/// Home view errors
#[derive(Debug, Error)]
pub enum HomeError {
    /// The search box content was rejected
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    /// A tile action could not be applied to its player
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}

/// Result type for home view operations
pub type Result<T> = std::result::Result<T, HomeError>;
