//! Torrent-metadata search proxy handler.

use super::SearchQuery;
use crate::api::AppState;
use crate::error::Error;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /search - Search torrent metadata
///
/// Read-only proxy against the external metadata database; each hit is
/// rendered as a magnet link.
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(
        ("q" = String, Query, description = "Substring to match against torrent names")
    ),
    responses(
        (status = 200, description = "Matching torrents as magnet links", body = Vec<crate::types::SearchResult>),
        (status = 400, description = "Missing query parameter"),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 503, description = "Search database not configured"),
        (status = 500, description = "Metadata query failed")
    )
)]
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Response {
    let q = query.q.as_deref().map(str::trim).unwrap_or("");
    if q.is_empty() {
        return Error::Validation("missing query parameter 'q'".to_string()).into_response();
    }

    match state.tracker.search(q).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, query = q, "Search failed");
            e.into_response()
        }
    }
}
