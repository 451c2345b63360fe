//! Error types for playback coordination

use soft_core::TrackKey;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No handle is mounted for this track
    #[error("No player mounted for track {0}")]
    UnknownTrack(TrackKey),

    /// Rendered position outside the current result
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The handle refused to start playback
    #[error("Failed to start playback of {key}: {reason}")]
    PlayFailed { key: TrackKey, reason: String },

    /// Media backend error reported by a handle
    #[error("Media error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
