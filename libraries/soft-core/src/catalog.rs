//! Fallback track catalog
//!
//! A fixed list of ten tracks that stands in for the remote search when the
//! default query cannot be resolved. The list is versioned in code; bump
//! `CATALOG_VERSION` whenever its contents change.

use crate::types::{Track, DEFAULT_PREVIEW_URL};

/// Version of the built-in catalog contents
pub const CATALOG_VERSION: u32 = 1;

struct CatalogEntry {
    title: &'static str,
    artist: &'static str,
    duration_sec: u32,
    cover_url: &'static str,
    url: &'static str,
    preview_url: &'static str,
}

const ENTRIES: [CatalogEntry; 10] = [
    CatalogEntry {
        title: "Sunset Lover",
        artist: "Petit Biscuit",
        duration_sec: 197,
        cover_url: "https://placehold.co/300x300?text=Sunset+Lover",
        url: "https://music.youtube.com/search?q=Petit+Biscuit+Sunset+Lover",
        preview_url: "https://prod-1.storage.jamendo.com/?trackid=1532771&format=mp31&from=app-devsite",
    },
    CatalogEntry {
        title: "Weightless",
        artist: "Marconi Union",
        duration_sec: 505,
        cover_url: "https://placehold.co/300x300?text=Weightless",
        url: "https://music.youtube.com/search?q=Marconi+Union+Weightless",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Night Owl",
        artist: "Galimatias",
        duration_sec: 226,
        cover_url: "https://placehold.co/300x300?text=Night+Owl",
        url: "https://music.youtube.com/search?q=Galimatias+Night+Owl",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Drive",
        artist: "Oh Wonder",
        duration_sec: 210,
        cover_url: "https://placehold.co/300x300?text=Drive",
        url: "https://music.youtube.com/search?q=Oh+Wonder+Drive",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Lose It",
        artist: "Oh Wonder",
        duration_sec: 193,
        cover_url: "https://placehold.co/300x300?text=Lose+It",
        url: "https://music.youtube.com/search?q=Oh+Wonder+Lose+It",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Tadow",
        artist: "Masego & FKJ",
        duration_sec: 301,
        cover_url: "https://placehold.co/300x300?text=Tadow",
        url: "https://music.youtube.com/search?q=Masego+FKJ+Tadow",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Golden",
        artist: "Beauvois",
        duration_sec: 214,
        cover_url: "https://placehold.co/300x300?text=Golden",
        url: "https://music.youtube.com/search?q=Beauvois+Golden",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "About You",
        artist: "XXYYXX",
        duration_sec: 264,
        cover_url: "https://placehold.co/300x300?text=About+You",
        url: "https://music.youtube.com/search?q=XXYYXX+About+You",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Borderline (Vocal Edit)",
        artist: "Tame Impala",
        duration_sec: 235,
        cover_url: "https://placehold.co/300x300?text=Borderline",
        url: "https://music.youtube.com/search?q=Tame+Impala+Borderline+Vocal+Edit",
        preview_url: DEFAULT_PREVIEW_URL,
    },
    CatalogEntry {
        title: "Be Around",
        artist: "Kidnap",
        duration_sec: 212,
        cover_url: "https://placehold.co/300x300?text=Be+Around",
        url: "https://music.youtube.com/search?q=Kidnap+Be+Around",
        preview_url: DEFAULT_PREVIEW_URL,
    },
];

impl CatalogEntry {
    fn to_track(&self) -> Track {
        Track {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            cover_url: self.cover_url.to_string(),
            preview_url: Some(self.preview_url.to_string()),
            duration_sec: Some(self.duration_sec),
            url: self.url.to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

/// Static fallback dataset
pub struct TrackCatalog;

impl TrackCatalog {
    /// All catalog tracks, in catalog order
    pub fn tracks() -> Vec<Track> {
        ENTRIES.iter().map(CatalogEntry::to_track).collect()
    }

    pub fn len() -> usize {
        ENTRIES.len()
    }

    /// Tracks whose title or artist contains `query` (case-insensitive),
    /// in catalog order, at most `limit` of them
    ///
    /// A blank query matches every track.
    pub fn search(query: &str, limit: usize) -> Vec<Track> {
        let needle = query.trim().to_lowercase();
        ENTRIES
            .iter()
            .filter(|e| needle.is_empty() || e.matches(&needle))
            .take(limit)
            .map(CatalogEntry::to_track)
            .collect()
    }
}
