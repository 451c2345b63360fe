/// Track domain type
use serde::{Deserialize, Deserializer, Serialize};

/// Preview asset used by tiles whose track has no preview of its own
pub const DEFAULT_PREVIEW_URL: &str = "/assets/audio/default.mp3";

/// A playable item with display metadata and a preview media reference
///
/// Tracks are immutable once obtained. The wire format is camelCase and
/// matches the `tracks` array of the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover art URI
    #[serde(default, deserialize_with = "string_or_empty")]
    pub cover_url: String,

    /// Preview audio URI, if the source offers one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    /// Nominal length in whole seconds, `None` when the source does not know it
    ///
    /// Independent of what the media handle reports once loaded.
    #[serde(
        default,
        deserialize_with = "whole_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_sec: Option<u32>,

    /// Link to the full track
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url: String,
}

impl Track {
    /// Create a track with title, artist and nominal duration
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration_sec: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            cover_url: String::new(),
            preview_url: None,
            duration_sec: Some(duration_sec),
            url: String::new(),
        }
    }

    /// Preview URI to bind a media handle to, falling back to the shared asset
    pub fn preview_or_default(&self) -> &str {
        match self.preview_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_PREVIEW_URL,
        }
    }

    /// Nominal length as fractional seconds, for formatting and media handles
    pub fn duration_secs_f64(&self) -> Option<f64> {
        self.duration_sec.map(f64::from)
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Sources disagree on the number type (197, 197.4, null); store floor(max(0, x)).
// Null and non-finite values mean the length is unknown.
fn whole_seconds<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<f64>::deserialize(deserializer)?;
    Ok(secs
        .filter(|s| s.is_finite())
        .map(|s| s.max(0.0).floor().min(f64::from(u32::MAX)) as u32))
}
