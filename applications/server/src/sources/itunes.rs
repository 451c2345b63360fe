//! iTunes Search API source
//!
//! `GET <base>/search?term=..&media=music&entity=musicTrack&country=..&limit=..`
use super::throttle::Throttle;
use super::TrackSource;
use crate::config::{ItunesSettings, MAX_SEARCH_LIMIT};
use crate::error::{Result, ServerError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use soft_core::Track;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const ITUNES_SEARCH_PATH: &str = "/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ItunesTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItunesTrack {
    track_name: Option<String>,
    collection_name: Option<String>,
    artist_name: Option<String>,
    artwork_url100: Option<String>,
    artwork_url60: Option<String>,
    artwork_url30: Option<String>,
    preview_url: Option<String>,
    track_time_millis: Option<f64>,
    track_view_url: Option<String>,
}

impl ItunesTrack {
    fn into_track(self) -> Track {
        // 100x100 artwork links also exist in 600x600
        let cover_url = self
            .artwork_url100
            .or(self.artwork_url60)
            .or(self.artwork_url30)
            .map(|url| url.replace("100x100", "600x600"))
            .unwrap_or_default();

        let duration_sec = self
            .track_time_millis
            .filter(|ms| ms.is_finite())
            .map(|ms| (ms.max(0.0) / 1000.0).round() as u32);

        Track {
            title: self
                .track_name
                .or(self.collection_name)
                .unwrap_or_default(),
            artist: self.artist_name.unwrap_or_default(),
            cover_url,
            preview_url: self.preview_url.filter(|url| !url.is_empty()),
            duration_sec,
            url: self.track_view_url.unwrap_or_default(),
        }
    }
}

/// Outcome of a single upstream attempt that did not produce a response body
enum Failure {
    /// Worth another attempt: connection trouble, 429 or 5xx
    Transient(ServerError),
    Fatal(ServerError),
}

/// Track source backed by the public iTunes Search API
#[derive(Debug)]
pub struct ItunesSource {
    http: Client,
    endpoint: Url,
    country: String,
    lang: Option<String>,
    prefer_preview: bool,
    attempts: u32,
    retry_delay: Duration,
    throttle: Throttle,
}

impl ItunesSource {
    pub fn new(settings: &ItunesSettings) -> Result<Self> {
        let base = settings.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}{}", base, ITUNES_SEARCH_PATH))
            .map_err(|e| ServerError::Config(format!("Invalid itunes.base_url: {}", e)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(format!("SoftMusicServer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            country: settings.country.clone(),
            lang: settings.lang.clone(),
            prefer_preview: settings.prefer_preview,
            attempts: settings.attempts.max(1),
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
            throttle: Throttle::per_second(settings.requests_per_sec),
        })
    }

    /// Send the query, retrying transient failures up to `attempts` times
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<SearchResponse> {
        let mut attempt = 1;
        loop {
            self.throttle.acquire().await;

            match self.request_once(params).await {
                Ok(body) => return Ok(body),
                Err(Failure::Transient(e)) if attempt < self.attempts => {
                    warn!(
                        attempt,
                        max_attempts = self.attempts,
                        error = %e,
                        "iTunes request failed, retrying"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(Failure::Transient(e) | Failure::Fatal(e)) => return Err(e),
            }
        }
    }

    async fn request_once(
        &self,
        params: &[(&str, &str)],
    ) -> std::result::Result<SearchResponse, Failure> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| Failure::Transient(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let error = ServerError::Source(format!(
                "iTunes answered with status {}",
                status.as_u16()
            ));
            let transient =
                status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS;
            return Err(if transient {
                Failure::Transient(error)
            } else {
                Failure::Fatal(error)
            });
        }

        response.json().await.map_err(|e| {
            Failure::Fatal(ServerError::Source(format!(
                "Failed to parse iTunes response: {}",
                e
            )))
        })
    }
}

/// Keep one candidate per title and artist, at the rank of its best match
///
/// Among candidates for the same track the first one carrying a preview
/// wins. The order of distinct tracks is left untouched.
fn pick_previewed(candidates: Vec<Track>) -> Vec<Track> {
    let mut picked: Vec<Track> = Vec::with_capacity(candidates.len());
    let mut slots: HashMap<(String, String), usize> = HashMap::new();

    for track in candidates {
        let identity = (track.title.to_lowercase(), track.artist.to_lowercase());
        match slots.get(&identity) {
            Some(&slot) => {
                if picked[slot].preview_url.is_none() && track.preview_url.is_some() {
                    picked[slot] = track;
                }
            }
            None => {
                slots.insert(identity, picked.len());
                picked.push(track);
            }
        }
    }

    picked
}

#[async_trait]
impl TrackSource for ItunesSource {
    fn name(&self) -> &'static str {
        "itunes"
    }

    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Track>> {
        // Extra candidates leave room for collapsing duplicates
        let requested = if self.prefer_preview {
            (limit * 2).min(MAX_SEARCH_LIMIT)
        } else {
            limit
        };
        debug!(url = %self.endpoint, term, limit, requested, "Querying iTunes");

        let limit_param = requested.to_string();
        let mut params = vec![
            ("term", term),
            ("media", "music"),
            ("entity", "musicTrack"),
            ("country", self.country.as_str()),
            ("limit", limit_param.as_str()),
        ];
        if let Some(lang) = &self.lang {
            params.push(("lang", lang.as_str()));
        }

        let body = self.fetch(&params).await?;

        let mut tracks: Vec<Track> = body
            .results
            .into_iter()
            .map(ItunesTrack::into_track)
            .filter(|t| !t.title.is_empty())
            .collect();

        if self.prefer_preview {
            tracks = pick_previewed(tracks);
        }
        tracks.truncate(limit);

        debug!(count = tracks.len(), "iTunes results mapped");
        Ok(tracks)
    }
}
