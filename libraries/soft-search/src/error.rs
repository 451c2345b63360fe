//! Error types for the track search client.

use thiserror::Error;

/// Errors that can occur while resolving a search remotely.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-2xx response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server is offline, unreachable or did not answer in time
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Invalid search API base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
