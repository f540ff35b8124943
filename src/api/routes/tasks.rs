//! Item registration handlers.

use super::{FetchRequest, FetchResponse};
use crate::api::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /tasks/fetch - Register a fetched media file
///
/// The external fetch process has already resolved the file onto disk; this
/// endpoint only records it. Repeated calls with the same path create
/// independent items.
#[utoipa::path(
    post,
    path = "/tasks/fetch",
    tag = "tasks",
    request_body = FetchRequest,
    responses(
        (status = 201, description = "Item registered", body = FetchResponse),
        (status = 400, description = "Empty or whitespace-only path"),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn fetch_task(
    State(state): State<AppState>,
    Json(request): Json<FetchRequest>,
) -> Response {
    match state
        .tracker
        .fetch(&request.path, request.title.as_deref())
        .await
    {
        Ok(id) => (StatusCode::CREATED, Json(FetchResponse { id })).into_response(),
        Err(e) => e.into_response(),
    }
}
