//! Per-track duration and position state

use crate::{format::format_time, handle::MediaHandle};
use serde::Serialize;
use soft_core::TrackKey;
use std::collections::HashMap;
use tracing::debug;

/// Duration and position of one rendered track, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProgressState {
    /// Duration reported by the media handle once loaded (0 until then)
    pub duration_sec: f64,
    /// Last reported or sought position
    pub current_sec: f64,
}

/// Tracks duration/position per track key and serves time labels
///
/// State is keyed by `TrackKey`, so entries of a replaced result are simply
/// unreachable; `clear` drops them all at once when a new result is loaded.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    entries: HashMap<TrackKey, ProgressState>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the duration a handle reported after loading metadata
    ///
    /// Stored as `floor(max(0, reported))`; absent or non-finite input stores 0.
    pub fn on_metadata_loaded(&mut self, key: TrackKey, reported_duration_sec: Option<f64>) {
        self.entries.entry(key).or_default().duration_sec = whole_seconds(reported_duration_sec);
    }

    /// Store the position a handle reported during playback
    pub fn on_time_update(&mut self, key: TrackKey, reported_current_sec: Option<f64>) {
        self.entries.entry(key).or_default().current_sec = whole_seconds(reported_current_sec);
    }

    /// Move `handle` to `requested_sec` and record the new position
    ///
    /// Non-finite targets are ignored (returns false). Negative targets are
    /// clamped to the start of the media.
    pub fn seek(
        &mut self,
        key: TrackKey,
        requested_sec: f64,
        handle: &mut dyn MediaHandle,
    ) -> bool {
        if !requested_sec.is_finite() {
            debug!(key = %key, requested_sec, "Ignoring seek to non-finite position");
            return false;
        }

        let target = requested_sec.max(0.0);
        handle.set_current_time(target);
        self.entries.entry(key).or_default().current_sec = target;
        true
    }

    /// Current state for `key` (zeros if nothing was reported yet)
    pub fn progress(&self, key: TrackKey) -> ProgressState {
        self.entries.get(&key).copied().unwrap_or_default()
    }

    /// `m:ss` label of the current position
    pub fn elapsed_label(&self, key: TrackKey) -> String {
        format_time(self.progress(key).current_sec)
    }

    /// `m:ss` label of the reported duration
    pub fn duration_label(&self, key: TrackKey) -> String {
        format_time(self.progress(key).duration_sec)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn whole_seconds(reported: Option<f64>) -> f64 {
    match reported {
        Some(secs) if secs.is_finite() => secs.max(0.0).floor(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::dummy::DummyHandle;
    use std::sync::{Arc, Mutex};

    #[test]
    fn defaults_to_zero_for_unseen_tracks() {
        let tracker = ProgressTracker::new();
        let key = TrackKey::generate();

        assert_eq!(tracker.progress(key), ProgressState::default());
        assert_eq!(tracker.elapsed_label(key), "0:00");
        assert_eq!(tracker.duration_label(key), "0:00");
    }

    #[test]
    fn metadata_duration_is_floored_and_clamped() {
        let mut tracker = ProgressTracker::new();
        let key = TrackKey::generate();

        tracker.on_metadata_loaded(key, Some(29.98));
        assert_eq!(tracker.progress(key).duration_sec, 29.0);
        assert_eq!(tracker.duration_label(key), "0:29");

        tracker.on_metadata_loaded(key, Some(-3.0));
        assert_eq!(tracker.progress(key).duration_sec, 0.0);

        tracker.on_metadata_loaded(key, Some(f64::NAN));
        assert_eq!(tracker.progress(key).duration_sec, 0.0);

        tracker.on_metadata_loaded(key, None);
        assert_eq!(tracker.progress(key).duration_sec, 0.0);
    }

    #[test]
    fn time_updates_overwrite_position() {
        let mut tracker = ProgressTracker::new();
        let key = TrackKey::generate();

        tracker.on_time_update(key, Some(1.2));
        tracker.on_time_update(key, Some(75.9));

        assert_eq!(tracker.progress(key).current_sec, 75.0);
        assert_eq!(tracker.elapsed_label(key), "1:15");
    }

    #[test]
    fn seek_moves_handle_and_records_exact_target() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = DummyHandle::new("a", &log);
        let mut boxed = handle.boxed();
        let mut tracker = ProgressTracker::new();
        let key = TrackKey::generate();

        assert!(tracker.seek(key, 42.5, boxed.as_mut()));
        assert_eq!(handle.position(), 42.5);
        assert_eq!(tracker.progress(key).current_sec, 42.5);
    }

    #[test]
    fn seek_to_nan_is_a_silent_no_op() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = DummyHandle::new("a", &log);
        let mut boxed = handle.boxed();
        let mut tracker = ProgressTracker::new();
        let key = TrackKey::generate();
        tracker.on_time_update(key, Some(12.0));

        assert!(!tracker.seek(key, f64::NAN, boxed.as_mut()));
        assert!(!tracker.seek(key, f64::INFINITY, boxed.as_mut()));

        assert_eq!(tracker.progress(key).current_sec, 12.0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn negative_seek_is_clamped_to_start() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = DummyHandle::new("a", &log);
        let mut boxed = handle.boxed();
        let mut tracker = ProgressTracker::new();
        let key = TrackKey::generate();

        assert!(tracker.seek(key, -8.0, boxed.as_mut()));
        assert_eq!(handle.position(), 0.0);
        assert_eq!(tracker.progress(key).current_sec, 0.0);
    }

    #[test]
    fn clear_drops_every_entry() {
        let mut tracker = ProgressTracker::new();
        let a = TrackKey::generate();
        let b = TrackKey::generate();
        tracker.on_time_update(a, Some(3.0));
        tracker.on_metadata_loaded(b, Some(30.0));
        assert_eq!(tracker.len(), 2);

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.progress(b), ProgressState::default());
    }
}
