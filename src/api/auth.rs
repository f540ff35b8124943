//! Authentication middleware for the REST API
//!
//! Provides optional shared-token authentication via the X-Auth header.
//! When ApiConfig::auth_token is set, all stateful requests must include a
//! matching X-Auth header or they will receive a 401 Unauthorized response.
//! Workers and admin clients share the same token.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Authentication middleware that checks for a valid token in the X-Auth header
///
/// Returns either:
/// - 401 Unauthorized if the token is missing or invalid
/// - The response from the next handler if authentication succeeds
pub async fn require_auth_token(
    State(expected_token): State<Option<String>>,
    request: Request,
    next: Next,
) -> Response {
    // If no token is configured, allow all requests through
    let Some(expected_token) = expected_token else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get("x-auth")
        .and_then(|value| value.to_str().ok());

    // Uses constant-time comparison to prevent timing side-channel attacks
    match provided {
        Some(token) if constant_time_eq(token.as_bytes(), expected_token.as_bytes()) => {
            next.run(request).await
        }
        Some(_) => unauthorized_response("Invalid auth token"),
        None => unauthorized_response("Missing X-Auth header"),
    }
}

/// Constant-time byte comparison to prevent timing side-channel attacks.
/// Always compares all bytes regardless of where the first mismatch occurs.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Helper function to create a 401 Unauthorized response with a JSON error message
fn unauthorized_response(message: &str) -> Response {
    let body = Json(json!({
        "error": {
            "code": "unauthorized",
            "message": message
        }
    }));

    (StatusCode::UNAUTHORIZED, body).into_response()
}
