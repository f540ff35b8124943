//! Worker-facing job handlers.

use super::CommitResponse;
use crate::api::AppState;
use crate::types::ItemId;
use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// POST /jobs/next - Lease the oldest eligible item
///
/// Idempotent "give me work" call for polling workers. An empty queue is the
/// normal 204 result, not an error; the claimed item stays `processing` until
/// its sprite is committed or its status is reset.
#[utoipa::path(
    post,
    path = "/jobs/next",
    tag = "jobs",
    responses(
        (status = 200, description = "Leased job", body = crate::types::LeasedJob),
        (status = 204, description = "No work available"),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn next_job(State(state): State<AppState>) -> Response {
    match state.tracker.lease_next().await {
        Ok(Some(job)) => (StatusCode::OK, Json(job)).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to lease next job");
            e.into_response()
        }
    }
}

/// POST /jobs/:id/done - Upload the finished sprite
///
/// Multipart upload; the sprite image goes in the `sprite` field. The file is
/// durably written under the media root before the item flips to `ready`.
#[utoipa::path(
    post,
    path = "/jobs/{id}/done",
    tag = "jobs",
    params(
        ("id" = i64, Path, description = "Item ID the sprite belongs to")
    ),
    request_body(content = Vec<u8>, description = "Sprite upload (multipart/form-data, field 'sprite')", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Artifact committed", body = CommitResponse),
        (status = 400, description = "Missing sprite field"),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Artifact write or store update failed")
    )
)]
pub async fn complete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Response {
    let mut sprite_content: Option<Vec<u8>> = None;
    let mut sprite_filename: Option<String> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();

        if name == "sprite" {
            if let Some(filename) = field.file_name() {
                sprite_filename = Some(filename.to_string());
            }
            match field.bytes().await {
                Ok(bytes) => sprite_content = Some(bytes.to_vec()),
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"error": {"code": "invalid_file", "message": format!("Failed to read sprite upload: {}", e)}})),
                    )
                        .into_response();
                }
            }
        }
    }

    let Some(sprite_bytes) = sprite_content else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": "missing_file", "message": "No sprite provided in 'sprite' field"}})),
        )
            .into_response();
    };

    let filename = sprite_filename.unwrap_or_else(|| "sprite.png".to_string());

    match state
        .tracker
        .commit_artifact(ItemId(id), &sprite_bytes, &filename)
        .await
    {
        Ok(artifact_path) => {
            (StatusCode::OK, Json(CommitResponse { artifact_path })).into_response()
        }
        Err(e) => e.into_response(),
    }
}
