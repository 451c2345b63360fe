//! Display rows for rendered tracks

use serde::Serialize;
use soft_core::{ResultEntry, TrackKey};
use soft_playback::{format_duration, ProgressTracker};

/// Everything one result tile displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    pub key: TrackKey,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    /// Preview to bind the player to (shared default asset if none)
    pub preview_url: String,
    pub url: String,
    /// Nominal length announced by the search source
    pub duration_label: String,
    /// Position reported by the player
    pub elapsed_label: String,
    /// Length reported by the player once its metadata is loaded
    pub playback_duration_label: String,
    pub playing: bool,
}

impl TileView {
    pub(crate) fn new(entry: &ResultEntry, tracker: &ProgressTracker, playing: bool) -> Self {
        let track = &entry.track;
        Self {
            key: entry.key,
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover_url: track.cover_url.clone(),
            preview_url: track.preview_or_default().to_string(),
            url: track.url.clone(),
            duration_label: format_duration(track.duration_secs_f64()),
            elapsed_label: tracker.elapsed_label(entry.key),
            playback_duration_label: tracker.duration_label(entry.key),
            playing,
        }
    }
}
