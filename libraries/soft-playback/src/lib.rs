//! Soft Music - Playback Coordination
//!
//! Platform-agnostic coordination of the preview players rendered for one
//! search result.
//!
//! This crate provides:
//! - Single-active-player enforcement across any number of handles
//! - Per-track duration/position tracking keyed by `TrackKey`
//! - Seeking with silent rejection of non-finite targets
//! - `m:ss` time labels
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `soft-playback` never touches a media backend directly:
//! - Players are reached through the `MediaHandle` trait
//! - Handles are created by the host through a `HandleFactory`
//! - The host forwards media notifications as `MediaEvent`s
//!
//! # Example
//!
//! ```rust
//! use soft_core::{ResultEntry, SearchResult, TrackCatalog};
//! use soft_playback::{MediaHandle, PlayerDeck, PlayerState, Result};
//!
//! struct SilentPlayer {
//!     paused: bool,
//!     position: f64,
//! }
//!
//! impl MediaHandle for SilentPlayer {
//!     fn play(&mut self) -> Result<()> {
//!         self.paused = false;
//!         Ok(())
//!     }
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!     fn is_paused(&self) -> bool {
//!         self.paused
//!     }
//!     fn duration(&self) -> Option<f64> {
//!         Some(30.0)
//!     }
//!     fn current_time(&self) -> f64 {
//!         self.position
//!     }
//!     fn set_current_time(&mut self, secs: f64) {
//!         self.position = secs;
//!     }
//! }
//!
//! let result = SearchResult::from_tracks(TrackCatalog::tracks());
//! let factory = |_: &ResultEntry| -> Box<dyn MediaHandle> {
//!     Box::new(SilentPlayer { paused: true, position: 0.0 })
//! };
//!
//! let mut deck = PlayerDeck::new();
//! deck.load(&result, &factory);
//!
//! assert_eq!(deck.toggle_index(0).unwrap(), PlayerState::Playing);
//! assert_eq!(deck.toggle_index(1).unwrap(), PlayerState::Playing);
//! assert_eq!(deck.active_index(), Some(1));
//! ```

mod coordinator;
mod deck;
mod error;
mod events;
mod format;
mod handle;
mod progress;

// Public exports
pub use coordinator::PlaybackCoordinator;
pub use deck::PlayerDeck;
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, PlayerState};
pub use format::{format_duration, format_time, UNKNOWN_DURATION};
pub use handle::{HandleFactory, MediaEvent, MediaHandle};
pub use progress::{ProgressState, ProgressTracker};
