use super::*;

#[tokio::test]
async fn test_get_config_returns_current_settings() {
    let (router, _guard) = test_router().await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let config = body_json(response).await;
    assert_eq!(config["jobs"]["worker_addr"], "http://localhost:9001");
    assert!(config["api"]["auth_token"].is_null());
}

#[tokio::test]
async fn test_get_config_redacts_auth_token() {
    let (router, _guard) = test_router_with_token("super-secret").await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/config")
                .header("X-Auth", "super-secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let config = body_json(response).await;
    assert_eq!(config["api"]["auth_token"], "***REDACTED***");
}

#[tokio::test]
async fn test_patch_config_updates_runtime_fields() {
    let (router, _guard) = test_router().await;

    let response = router
        .clone()
        .oneshot(json_patch(
            "/config",
            r#"{"worker_addr": "http://worker-2:9001", "lease_timeout_secs": 600}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let config = body_json(response).await;
    assert_eq!(config["jobs"]["worker_addr"], "http://worker-2:9001");
    assert_eq!(config["jobs"]["lease_timeout_secs"], 600);

    // The change sticks for subsequent reads
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let config = body_json(response).await;
    assert_eq!(config["jobs"]["worker_addr"], "http://worker-2:9001");
}
