//! Configuration handlers.

use crate::api::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// GET /config - Get current config (sensitive fields redacted)
#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    responses(
        (status = 200, description = "Current configuration", body = crate::config::Config),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let mut config = state.tracker.current_config().await;

    // Redact the shared auth token
    if config.api.auth_token.is_some() {
        config.api.auth_token = Some("***REDACTED***".to_string());
    }

    // Redact search database credentials
    if config.search.database_url.is_some() {
        config.search.database_url = Some("***REDACTED***".to_string());
    }

    (StatusCode::OK, Json(config))
}

/// PATCH /config - Update runtime-changeable config fields
#[utoipa::path(
    patch,
    path = "/config",
    tag = "config",
    request_body(content = crate::config::ConfigUpdate, description = "Configuration updates (runtime-changeable fields only)"),
    responses(
        (status = 200, description = "Configuration updated", body = crate::config::Config),
        (status = 400, description = "Malformed update payload"),
        (status = 401, description = "Missing or invalid auth token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_config(
    State(state): State<AppState>,
    Json(updates): Json<crate::config::ConfigUpdate>,
) -> impl IntoResponse {
    state.tracker.update_config(updates).await;

    // Return the updated config (with redaction)
    get_config(State(state)).await
}
