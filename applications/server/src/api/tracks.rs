/// Track search API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use soft_core::Track;

/// Longest accepted search term, in characters
pub const MAX_QUERY_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// `{"tracks": [...]}`, or `{}` when there was nothing to search for
#[derive(Debug, Default, Serialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

/// GET /tracks/search?q=
pub async fn search_tracks(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let Some(term) = params.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(Json(SearchResponse::default()));
    };

    if term.chars().count() > MAX_QUERY_CHARS {
        return Err(ServerError::BadRequest(format!(
            "Query is longer than {} characters",
            MAX_QUERY_CHARS
        )));
    }

    let mut tracks = app_state.source.search(term, app_state.limit).await?;
    tracks.truncate(app_state.limit);

    tracing::info!(
        source = app_state.source.name(),
        term,
        count = tracks.len(),
        "Track search served"
    );

    Ok(Json(SearchResponse {
        tracks: Some(tracks),
    }))
}
