//! Domain types for Soft Music

mod ids;
mod search_result;
mod track;

pub use ids::TrackKey;
pub use search_result::{ResultEntry, SearchResult, MAX_RESULTS};
pub use track::{Track, DEFAULT_PREVIEW_URL};
