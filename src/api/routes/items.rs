//! Item listing and mutation handlers.

use crate::api::AppState;
use crate::types::{ItemId, ItemPatch};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /items - List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All tracked items, newest first", body = Vec<crate::types::ItemInfo>),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_items(State(state): State<AppState>) -> Response {
    match state.tracker.list_items().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list items");
            e.into_response()
        }
    }
}

/// GET /items/:id - Get single item
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item information", body = crate::types::ItemInfo),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_item(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.tracker.get_item(ItemId(id)).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PATCH /items/:id - Update title/status
#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = crate::types::ItemPatch,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ItemPatch>,
) -> Response {
    match state.tracker.update_item(ItemId(id), patch).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /items/:id - Delete item
///
/// Removes the row only; any sprite file on disk is left for an external
/// collaborator to reconcile.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.tracker.delete_item(ItemId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
