//! Track sources behind `/tracks/search`

mod catalog;
mod itunes;
mod throttle;

pub use catalog::CatalogSource;
pub use itunes::{ItunesSource, ITUNES_SEARCH_PATH};

use crate::config::{ServerConfig, SourceKind};
use crate::error::Result;
use async_trait::async_trait;
use soft_core::Track;
use std::sync::Arc;

/// Resolves a search term to tracks, best match first
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// At most `limit` tracks matching `term`
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Track>>;
}

/// Build the source selected by `search.source`
pub fn from_config(config: &ServerConfig) -> Result<Arc<dyn TrackSource>> {
    let source: Arc<dyn TrackSource> = match config.search.source {
        SourceKind::Catalog => Arc::new(CatalogSource),
        SourceKind::Itunes => Arc::new(ItunesSource::new(&config.itunes)?),
    };
    tracing::info!(source = source.name(), "Track source ready");
    Ok(source)
}
