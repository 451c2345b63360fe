/// Search result domain type
use super::{Track, TrackKey};
use serde::Serialize;

/// Maximum number of tracks a search result holds
pub const MAX_RESULTS: usize = 10;

/// One track of a materialized result, tagged with its synthetic key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub key: TrackKey,
    pub track: Track,
}

/// Ordered list of at most `MAX_RESULTS` tracks
///
/// Order is the server (or catalog) order; results are never re-sorted.
/// A result is replaced wholesale by the next search, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    entries: Vec<ResultEntry>,
}

impl SearchResult {
    /// An empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Materialize a result from tracks, keeping the first `MAX_RESULTS`
    /// and assigning a fresh key to each
    pub fn from_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        let entries = tracks
            .into_iter()
            .take(MAX_RESULTS)
            .map(|track| ResultEntry {
                key: TrackKey::generate(),
                track,
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultEntry> {
        self.entries.iter()
    }

    /// Entry at a rendered position
    pub fn get(&self, index: usize) -> Option<&ResultEntry> {
        self.entries.get(index)
    }

    /// Key of the entry at a rendered position
    pub fn key_at(&self, index: usize) -> Option<TrackKey> {
        self.entries.get(index).map(|e| e.key)
    }

    /// Rendered position of a key, if it belongs to this result
    pub fn position(&self, key: TrackKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Track for a key, if it belongs to this result
    pub fn track(&self, key: TrackKey) -> Option<&Track> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.track)
    }

    pub fn keys(&self) -> impl Iterator<Item = TrackKey> + '_ {
        self.entries.iter().map(|e| e.key)
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a ResultEntry;
    type IntoIter = std::slice::Iter<'a, ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
