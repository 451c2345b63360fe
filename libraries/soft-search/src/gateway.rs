//! Search gateway - resolves queries and publishes the search state
//!
//! Every call to `search` takes a new generation number. Only the response of
//! the newest generation may replace the published snapshot; responses of
//! older generations are dropped when they arrive.

use crate::{
    client::TrackSearch,
    form::SearchQuery,
    types::{ResultSource, SearchOutcome, SearchSnapshot, SearchStatus},
};
use soft_core::{SearchResult, TrackCatalog};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Resolves search queries against a `TrackSearch` source
///
/// On failure of the default query the fallback catalog is shown instead;
/// any other failure clears the result and publishes an error status.
pub struct SearchGateway<S> {
    source: S,
    default_query: String,
    generation: AtomicU64,
    state: watch::Sender<SearchSnapshot>,
}

impl<S: TrackSearch> SearchGateway<S> {
    pub fn new(source: S, default_query: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SearchSnapshot::default());
        Self {
            source,
            default_query: default_query.into(),
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Receive every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state.subscribe()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> SearchSnapshot {
        self.state.borrow().clone()
    }

    pub fn default_query(&self) -> &str {
        &self.default_query
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one search and publish its outcome
    ///
    /// The previous result stays visible while the request is in flight.
    pub async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, query = %query, "Starting search");

        self.publish(generation, |previous| SearchSnapshot {
            generation,
            status: SearchStatus::Searching,
            result: Arc::clone(&previous.result),
            source: previous.source,
        });

        let fetched = self.source.search_tracks(query.as_str()).await;

        if !self.is_current(generation) {
            debug!(generation, "Discarding superseded search response");
            return SearchOutcome::Superseded;
        }

        let (snapshot, outcome) = match fetched {
            Ok(tracks) if tracks.is_empty() => {
                info!(generation, query = %query, "Search returned no tracks");
                (
                    resolved(
                        generation,
                        SearchStatus::Empty,
                        SearchResult::empty(),
                        ResultSource::Remote,
                    ),
                    SearchOutcome::Empty,
                )
            }
            Ok(tracks) => {
                let result = SearchResult::from_tracks(tracks);
                let count = result.len();
                info!(generation, count, "Search loaded");
                (
                    resolved(generation, SearchStatus::Loaded, result, ResultSource::Remote),
                    SearchOutcome::Loaded {
                        count,
                        source: ResultSource::Remote,
                    },
                )
            }
            Err(e) if query.is_default(&self.default_query) => {
                warn!(generation, error = %e, "Default search failed, showing fallback catalog");
                let result = SearchResult::from_tracks(TrackCatalog::tracks());
                let count = result.len();
                (
                    resolved(generation, SearchStatus::Loaded, result, ResultSource::Fallback),
                    SearchOutcome::Loaded {
                        count,
                        source: ResultSource::Fallback,
                    },
                )
            }
            Err(e) => {
                warn!(generation, query = %query, error = %e, "Search failed");
                let snapshot = SearchSnapshot {
                    generation,
                    status: SearchStatus::failed(),
                    result: Arc::new(SearchResult::empty()),
                    source: None,
                };
                (snapshot, SearchOutcome::Failed(e))
            }
        };

        if self.publish(generation, |_| snapshot) {
            outcome
        } else {
            debug!(generation, "Discarding superseded search response");
            SearchOutcome::Superseded
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    // Replace the snapshot if `generation` is still the newest search.
    // The check runs under the channel lock, so a newer search cannot
    // publish in between.
    fn publish(
        &self,
        generation: u64,
        next: impl FnOnce(&SearchSnapshot) -> SearchSnapshot,
    ) -> bool {
        self.state.send_if_modified(|current| {
            if !self.is_current(generation) {
                return false;
            }
            *current = next(current);
            true
        })
    }
}

fn resolved(
    generation: u64,
    status: SearchStatus,
    result: SearchResult,
    source: ResultSource,
) -> SearchSnapshot {
    SearchSnapshot {
        generation,
        status,
        result: Arc::new(result),
        source: Some(source),
    }
}
