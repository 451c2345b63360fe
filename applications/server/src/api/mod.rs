/// API route modules
pub mod health;
pub mod tracks;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router
///
/// CORS is permissive: the browsing client is served from another origin.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/tracks/search", get(tracks::search_tracks))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
