//! Remote track search over HTTP.

use crate::error::{Result, SearchError};
use crate::types::SearchConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use soft_core::Track;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Path of the search endpoint relative to the API base.
pub const SEARCH_PATH: &str = "/tracks/search";

/// Something that can resolve a query to a list of tracks.
///
/// The returned list is in relevance order and may be longer than what is
/// displayed; truncation happens when the result is materialized.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackSearch: Send + Sync {
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>>;
}

#[async_trait]
impl<T: TrackSearch + ?Sized> TrackSearch for Arc<T> {
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        (**self).search_tracks(query).await
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tracks: Option<Vec<Track>>,
}

/// HTTP client for `GET <base>/tracks/search?q=<query>`.
#[derive(Debug, Clone)]
pub struct TrackSearchClient {
    http: Client,
    endpoint: Url,
}

impl TrackSearchClient {
    /// Create a client for the configured API base.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let base = config.base_url.trim();
        if base.is_empty() {
            return Err(SearchError::InvalidUrl("URL cannot be empty".into()));
        }

        let base = base.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}{SEARCH_PATH}"))
            .map_err(|e| SearchError::InvalidUrl(format!("{base}: {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("SoftMusic/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SearchError::Request)?;

        Ok(Self { http, endpoint })
    }

    /// Fully resolved search endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TrackSearch for TrackSearchClient {
    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        debug!(url = %self.endpoint, query, "Searching tracks");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    SearchError::ServerUnreachable(e.to_string())
                } else {
                    SearchError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SearchError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.bytes().await?;
        let tracks = decode_tracks(&body)?;

        debug!(count = tracks.len(), "Search response decoded");
        Ok(tracks)
    }
}

/// Decode a search response body.
///
/// The body must be a JSON object. A missing or null `tracks` field is an
/// empty list; any other malformed content is a parse error.
pub fn decode_tracks(body: &[u8]) -> Result<Vec<Track>> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| SearchError::ParseError(format!("Invalid JSON: {e}")))?;

    if !value.is_object() {
        return Err(SearchError::ParseError(
            "Expected a JSON object with a tracks field".into(),
        ));
    }

    let response: SearchResponse = serde_json::from_value(value)
        .map_err(|e| SearchError::ParseError(format!("Failed to parse tracks: {e}")))?;

    Ok(response.tracks.unwrap_or_default())
}
