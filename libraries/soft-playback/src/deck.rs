//! Player deck - the set of players bound to one rendered result
//!
//! Pairs a `PlaybackCoordinator` with a `ProgressTracker` and replaces both
//! together whenever a new search result is rendered.

use crate::{
    coordinator::PlaybackCoordinator,
    error::{PlaybackError, Result},
    events::{PlaybackEvent, PlayerState},
    handle::{HandleFactory, MediaEvent},
    progress::{ProgressState, ProgressTracker},
};
use soft_core::{SearchResult, TrackKey};
use tracing::{debug, info};

/// Players and progress state for the currently rendered tiles
#[derive(Default)]
pub struct PlayerDeck {
    coordinator: PlaybackCoordinator,
    tracker: ProgressTracker,
    // Rendered order of the loaded result
    keys: Vec<TrackKey>,
}

impl PlayerDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every player with fresh handles for `result`
    ///
    /// The active player (if any) is paused, the registry and all progress
    /// state are dropped, then one handle per entry is mounted.
    pub fn load(&mut self, result: &SearchResult, factory: &dyn HandleFactory) {
        self.coordinator.clear();
        self.tracker.clear();
        self.keys = result.keys().collect();

        for entry in result {
            self.coordinator.mount(entry.key, factory.create(entry));
        }

        info!(players = self.keys.len(), "Loaded players for new result");
    }

    pub fn toggle(&mut self, key: TrackKey) -> Result<PlayerState> {
        self.coordinator.toggle(key)
    }

    /// Toggle by rendered position
    pub fn toggle_index(&mut self, index: usize) -> Result<PlayerState> {
        let key = self.key_at(index).ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.coordinator.toggle(key)
    }

    /// Route a media notification for `key`
    ///
    /// Reported values are read from the handle. Notifications for keys that
    /// are not mounted (stale tiles) are dropped.
    pub fn handle_event(&mut self, key: TrackKey, event: MediaEvent) {
        let Some(handle) = self.coordinator.handle(key) else {
            debug!(key = %key, ?event, "Dropping event for unmounted player");
            return;
        };

        match event {
            MediaEvent::MetadataLoaded => {
                let duration = handle.duration();
                self.tracker.on_metadata_loaded(key, duration);
            }
            MediaEvent::TimeUpdate => {
                let current = handle.current_time();
                self.tracker.on_time_update(key, Some(current));
            }
            MediaEvent::Ended => self.coordinator.on_ended(key),
        }
    }

    /// Seek the player for `key`
    ///
    /// Returns false when the target is not a finite number or the key is not
    /// mounted; neither case is an error.
    pub fn seek(&mut self, key: TrackKey, requested_sec: f64) -> bool {
        let Some(handle) = self.coordinator.handle_mut(key) else {
            return false;
        };

        if !self.tracker.seek(key, requested_sec, handle) {
            return false;
        }

        let position_sec = self.tracker.progress(key).current_sec;
        self.coordinator.emit(PlaybackEvent::Seeked { key, position_sec });
        true
    }

    // ===== State Queries =====

    pub fn key_at(&self, index: usize) -> Option<TrackKey> {
        self.keys.get(index).copied()
    }

    pub fn keys(&self) -> &[TrackKey] {
        &self.keys
    }

    pub fn active(&self) -> Option<TrackKey> {
        self.coordinator.active()
    }

    /// Rendered position of the active player
    pub fn active_index(&self) -> Option<usize> {
        let active = self.coordinator.active()?;
        self.keys.iter().position(|k| *k == active)
    }

    pub fn is_playing(&self, key: TrackKey) -> bool {
        self.coordinator.is_playing(key)
    }

    pub fn progress(&self, key: TrackKey) -> ProgressState {
        self.tracker.progress(key)
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Drain pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.coordinator.drain_events()
    }
}
