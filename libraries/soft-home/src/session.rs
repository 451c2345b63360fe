//! Home session - the music home view model
//!
//! Wires the search box to the gateway and the gateway's results to the
//! player deck. Tile actions arrive by rendered position and are resolved to
//! the `TrackKey` of the result currently on screen.

use crate::{error::Result, tile::TileView};
use soft_core::{SearchResult, TrackKey};
use soft_playback::{
    HandleFactory, MediaEvent, PlaybackError, PlaybackEvent, PlayerDeck, PlayerState,
};
use soft_search::{
    SearchForm, SearchGateway, SearchOutcome, SearchSnapshot, SearchStatus, TrackSearch,
};
use std::sync::Arc;
use tracing::debug;

/// State behind the music home view
pub struct HomeSession<S> {
    form: SearchForm,
    gateway: SearchGateway<S>,
    deck: PlayerDeck,
    factory: Box<dyn HandleFactory + Send>,

    // Result the deck is currently bound to
    rendered: Arc<SearchResult>,
}

impl<S: TrackSearch> HomeSession<S> {
    /// Create a session; the form uses the gateway's default query
    pub fn new(gateway: SearchGateway<S>, factory: impl HandleFactory + Send + 'static) -> Self {
        let form = SearchForm::new(gateway.default_query());
        let rendered = Arc::clone(&gateway.snapshot().result);
        Self {
            form,
            gateway,
            deck: PlayerDeck::new(),
            factory: Box::new(factory),
            rendered,
        }
    }

    // ===== Search =====

    /// Validate `raw`, run the search and rebind the players
    ///
    /// A rejected query leaves everything untouched.
    pub async fn submit(&mut self, raw: &str) -> Result<SearchOutcome> {
        let query = self.form.validate(raw)?;
        let outcome = self.gateway.search(&query).await;
        self.sync();
        Ok(outcome)
    }

    /// Bind the deck to the latest published result if it changed
    ///
    /// Returns true when the players were replaced.
    pub fn sync(&mut self) -> bool {
        let snapshot = self.gateway.snapshot();
        if Arc::ptr_eq(&snapshot.result, &self.rendered) {
            return false;
        }

        debug!(
            generation = snapshot.generation,
            tracks = snapshot.result.len(),
            "Rebinding players to new result"
        );
        self.deck.load(&snapshot.result, self.factory.as_ref());
        self.rendered = snapshot.result;
        true
    }

    // ===== Tile Actions =====

    /// Play/pause button of the tile at `index`
    pub fn toggle(&mut self, index: usize) -> Result<PlayerState> {
        Ok(self.deck.toggle_index(index)?)
    }

    /// Seek bar of the tile at `index`
    ///
    /// Returns false when the target is not a finite number.
    pub fn seek(&mut self, index: usize, secs: f64) -> Result<bool> {
        let key = self.key_at(index)?;
        Ok(self.deck.seek(key, secs))
    }

    /// Forward a notification of the player rendered at `index`
    pub fn media_event(&mut self, index: usize, event: MediaEvent) -> Result<()> {
        let key = self.key_at(index)?;
        self.deck.handle_event(key, event);
        Ok(())
    }

    // ===== View State =====

    pub fn status(&self) -> SearchStatus {
        self.gateway.snapshot().status
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.gateway.snapshot()
    }

    /// One display row per rendered track, in result order
    pub fn tiles(&self) -> Vec<TileView> {
        self.rendered
            .iter()
            .map(|entry| TileView::new(entry, self.deck.tracker(), self.deck.is_playing(entry.key)))
            .collect()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.deck.active_index()
    }

    /// Drain pending playback events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.deck.drain_events()
    }

    fn key_at(&self, index: usize) -> Result<TrackKey> {
        Ok(self
            .deck
            .key_at(index)
            .ok_or(PlaybackError::IndexOutOfBounds(index))?)
    }
}
