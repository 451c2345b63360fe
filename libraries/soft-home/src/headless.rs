//! Media handle for hosts without an audio backend
//!
//! Used by the command line and by tests: it honours play/pause/seek and
//! reports the nominal track length as its duration, but produces no sound.
//! Seeks are stored as given, the same value the progress tracker records.

use soft_core::ResultEntry;
use soft_playback::{MediaHandle, Result};

/// Silent stand-in for a preview player
#[derive(Debug, Clone)]
pub struct SilentHandle {
    paused: bool,
    position: f64,
    duration: Option<f64>,
}

impl SilentHandle {
    pub fn new(duration_sec: Option<f64>) -> Self {
        Self {
            paused: true,
            position: 0.0,
            duration: duration_sec,
        }
    }

    /// Factory function creating one silent handle per entry
    pub fn for_entry(entry: &ResultEntry) -> Box<dyn MediaHandle> {
        Box::new(Self::new(entry.track.duration_secs_f64()))
    }
}

impl MediaHandle for SilentHandle {
    fn play(&mut self) -> Result<()> {
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position = secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soft_core::{SearchResult, Track};
    use soft_playback::{MediaEvent, PlayerDeck};

    #[test]
    fn unknown_length_reports_no_duration() {
        let mut track = Track::new("Drive", "Oh Wonder", 0);
        track.duration_sec = None;
        let result = SearchResult::from_tracks(vec![track]);

        let handle = SilentHandle::for_entry(result.get(0).unwrap());
        assert_eq!(handle.duration(), None);
    }

    #[test]
    fn seek_past_the_end_matches_tracked_position() {
        let result = SearchResult::from_tracks(vec![Track::new("Intro", "The xx", 0)]);
        let key = result.key_at(0).unwrap();
        let mut deck = PlayerDeck::new();
        deck.load(&result, &SilentHandle::for_entry);

        assert!(deck.seek(key, 42.0));
        deck.handle_event(key, MediaEvent::TimeUpdate);

        assert_eq!(deck.progress(key).current_sec, 42.0);
        assert_eq!(deck.tracker().elapsed_label(key), "0:42");
    }
}
