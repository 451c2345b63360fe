//! Playback coordinator - single-active-player enforcement
//!
//! Owns the registry of mounted media handles and the key of the one track
//! allowed to be playing. No other component touches either.

use crate::{
    error::{PlaybackError, Result},
    events::{PlaybackEvent, PlayerState},
    handle::MediaHandle,
};
use soft_core::{SearchResult, TrackKey};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Enforces "at most one playing track" across independently rendered players
///
/// Handles are mounted and unmounted as tiles appear and disappear; the
/// registry is cleared whenever the rendered result is replaced, so a handle
/// from an older result can never be reached again.
pub struct PlaybackCoordinator {
    handles: HashMap<TrackKey, Box<dyn MediaHandle>>,
    active: Option<TrackKey>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            active: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Registry =====

    /// Register the handle rendered for `key`
    ///
    /// Replacing the handle of the active track pauses the old handle first.
    pub fn mount(&mut self, key: TrackKey, handle: Box<dyn MediaHandle>) {
        if let Some(mut previous) = self.handles.insert(key, handle) {
            if self.active == Some(key) {
                previous.pause();
                self.active = None;
                self.emit_state_changed(key, PlayerState::Paused);
            }
        }
        debug!(key = %key, mounted = self.handles.len(), "Mounted player");
    }

    /// Remove the handle for `key`, pausing it if it was the active one
    ///
    /// Returns false when nothing was mounted under `key`.
    pub fn unmount(&mut self, key: TrackKey) -> bool {
        let Some(mut handle) = self.handles.remove(&key) else {
            return false;
        };

        if self.active == Some(key) {
            handle.pause();
            self.active = None;
            self.emit_state_changed(key, PlayerState::Paused);
        }
        debug!(key = %key, mounted = self.handles.len(), "Unmounted player");
        true
    }

    /// Drop every handle, pausing the active one first
    pub fn clear(&mut self) {
        if let Some(key) = self.active.take() {
            if let Some(handle) = self.handles.get_mut(&key) {
                handle.pause();
            }
            self.emit_state_changed(key, PlayerState::Paused);
        }
        self.handles.clear();
    }

    pub fn mounted_len(&self) -> usize {
        self.handles.len()
    }

    // ===== Playback Control =====

    /// Toggle the player for `key`
    ///
    /// If another track is active it is paused before this one starts.
    /// A paused target starts playing and becomes active; a playing target
    /// is paused and nothing is active afterwards.
    pub fn toggle(&mut self, key: TrackKey) -> Result<PlayerState> {
        if !self.handles.contains_key(&key) {
            return Err(PlaybackError::UnknownTrack(key));
        }

        if let Some(previous) = self.active {
            if previous != key {
                if let Some(handle) = self.handles.get_mut(&previous) {
                    handle.pause();
                }
                self.active = None;
                self.emit_state_changed(previous, PlayerState::Paused);
            }
        }

        let handle = self
            .handles
            .get_mut(&key)
            .ok_or(PlaybackError::UnknownTrack(key))?;

        if handle.is_paused() {
            if let Err(e) = handle.play() {
                warn!(key = %key, error = %e, "Player refused to start");
                self.active = None;
                self.pending_events.push(PlaybackEvent::Error {
                    message: e.to_string(),
                });
                return Err(PlaybackError::PlayFailed {
                    key,
                    reason: e.to_string(),
                });
            }
            self.active = Some(key);
            self.emit_state_changed(key, PlayerState::Playing);
            Ok(PlayerState::Playing)
        } else {
            handle.pause();
            self.active = None;
            self.emit_state_changed(key, PlayerState::Paused);
            Ok(PlayerState::Paused)
        }
    }

    /// Toggle by rendered position in `result`
    pub fn toggle_index(&mut self, result: &SearchResult, index: usize) -> Result<PlayerState> {
        let key = result
            .key_at(index)
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.toggle(key)
    }

    /// Natural completion of `key`
    ///
    /// Equivalent to a pause of that track; no other track is started.
    pub fn on_ended(&mut self, key: TrackKey) {
        if !self.handles.contains_key(&key) {
            return;
        }
        if self.active == Some(key) {
            self.active = None;
        }
        self.pending_events.push(PlaybackEvent::TrackFinished { key });
    }

    // ===== State Queries =====

    /// Key of the track currently allowed to play
    pub fn active(&self) -> Option<TrackKey> {
        self.active
    }

    pub fn is_playing(&self, key: TrackKey) -> bool {
        self.active == Some(key)
    }

    pub(crate) fn handle_mut(&mut self, key: TrackKey) -> Option<&mut (dyn MediaHandle + 'static)> {
        self.handles.get_mut(&key).map(|h| h.as_mut())
    }

    pub(crate) fn handle(&self, key: TrackKey) -> Option<&(dyn MediaHandle + 'static)> {
        self.handles.get(&key).map(|h| h.as_ref())
    }

    // ===== Events =====

    /// Drain pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub(crate) fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_state_changed(&mut self, key: TrackKey, state: PlayerState) {
        self.pending_events
            .push(PlaybackEvent::StateChanged { key, state });
    }
}
