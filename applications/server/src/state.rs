/// Shared application state
use crate::sources::TrackSource;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TrackSource>,
    /// Maximum number of tracks per search response
    pub limit: usize,
}

impl AppState {
    pub fn new(source: Arc<dyn TrackSource>, limit: usize) -> Self {
        Self { source, limit }
    }
}
