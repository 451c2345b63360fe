//! Search over the built-in catalog
use super::TrackSource;
use crate::error::Result;
use async_trait::async_trait;
use soft_core::{Track, TrackCatalog};

/// Filters the fallback catalog by title or artist
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSource;

#[async_trait]
impl TrackSource for CatalogSource {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Track>> {
        Ok(TrackCatalog::search(term, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filters_by_artist() {
        let tracks = CatalogSource.search("oh wonder", 10).await.unwrap();
        let titles: Vec<_> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Drive", "Lose It"]);
    }

    #[tokio::test]
    async fn test_respects_limit() {
        let tracks = CatalogSource.search("o", 3).await.unwrap();
        assert_eq!(tracks.len(), 3);
    }
}
