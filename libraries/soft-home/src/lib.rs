//! Soft Music - Home View
//!
//! View model of the music home page: a search box, up to ten result tiles
//! and one preview player per tile, of which at most one plays at a time.
//!
//! # Flow
//!
//! 1. `HomeSession::submit` validates the query with `SearchForm`
//! 2. `SearchGateway` resolves it (remote, or fallback catalog for the default query)
//! 3. The `PlayerDeck` is rebound: one handle per entry via the `HandleFactory`
//! 4. Tile actions (`toggle`, `seek`, `media_event`) address tiles by position
//!
//! # Example
//!
//! ```ignore
//! use soft_home::{HomeSession, SilentHandle};
//! use soft_search::{SearchConfig, SearchGateway, TrackSearchClient};
//!
//! let config = SearchConfig::default();
//! let gateway = SearchGateway::new(TrackSearchClient::new(&config)?, config.default_query);
//! let mut session = HomeSession::new(gateway, SilentHandle::for_entry);
//!
//! session.submit("sunset").await?;
//! for tile in session.tiles() {
//!     println!("{} - {} [{}]", tile.artist, tile.title, tile.duration_label);
//! }
//! ```

mod error;
mod headless;
mod session;
mod tile;

pub use error::{HomeError, Result};
pub use headless::SilentHandle;
pub use session::HomeSession;
pub use tile::TileView;
