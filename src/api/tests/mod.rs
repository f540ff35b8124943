use super::*;
use crate::tracker::test_helpers::{create_test_tracker, create_test_tracker_with};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt; // for oneshot

mod config;
mod jobs;

/// Router over a fresh tracker with the default (unauthenticated) config
async fn test_router() -> (Router, tempfile::TempDir) {
    let (tracker, temp_dir) = create_test_tracker().await;
    let config = tracker.get_config();
    (create_router(tracker, config), temp_dir)
}

/// Router over a fresh tracker requiring the given X-Auth token
async fn test_router_with_token(token: &str) -> (Router, tempfile::TempDir) {
    let token = token.to_string();
    let (tracker, temp_dir) =
        create_test_tracker_with(move |config| config.api.auth_token = Some(token)).await;
    let config = tracker.get_config();
    (create_router(tracker, config), temp_dir)
}

/// Shorthand for a JSON POST request
fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Shorthand for a JSON PATCH request
fn json_patch(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body as parsed JSON
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register one item and return its id
async fn register_item(router: &Router, path: &str) -> i64 {
    let response = router
        .clone()
        .oneshot(json_post(
            "/tasks/fetch",
            &format!(r#"{{"path": "{}"}}"#, path),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
