//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are queued as
//! state transitions happen and drained by the host:
//! - Player state changes (play/pause)
//! - Natural completion of a track
//! - Explicit seeks
//! - Errors reported by handles

use serde::Serialize;
use soft_core::TrackKey;

/// Events emitted by the playback deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlaybackEvent {
    /// A player started or stopped
    StateChanged {
        /// Track whose player changed
        key: TrackKey,
        /// The new player state
        state: PlayerState,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// Key of the finished track
        key: TrackKey,
    },

    /// Position moved by an explicit seek
    Seeked {
        key: TrackKey,
        position_sec: f64,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}

/// State of one player as reported in events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerState {
    /// Playing audio
    Playing,
    /// Paused (or never started)
    Paused,
}
