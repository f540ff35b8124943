use super::*;

const BOUNDARY: &str = "sprite-test-boundary";

/// Build a multipart/form-data body with a single file field
fn multipart_body(field: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn commit_request(id: i64, field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/jobs/{}/done", id))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, filename, bytes)))
        .unwrap()
}

fn next_job_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/jobs/next")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_next_job_with_empty_queue_is_204() {
    let (router, _guard) = test_router().await;

    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_next_job_leases_oldest_once() {
    let (router, _guard) = test_router().await;

    let a = register_item(&router, "/x/a.mp4").await;
    let b = register_item(&router, "/x/b.mp4").await;

    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let job = body_json(response).await;
    assert_eq!(job["id"].as_i64().unwrap(), a);
    assert_eq!(job["path"], "/x/a.mp4");

    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    let job = body_json(response).await;
    assert_eq!(job["id"].as_i64().unwrap(), b);

    // Both leased; the queue is dry
    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_full_worker_cycle() {
    let (router, temp_dir) = test_router().await;

    let id = register_item(&router, "/x/movie.mp4").await;

    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sprite = b"rendered sprite sheet";
    let response = router
        .clone()
        .oneshot(commit_request(id, "sprite", "thumb.png", sprite))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let artifact_path = body["artifact_path"].as_str().unwrap().to_string();
    assert_eq!(artifact_path, format!("sprites/{}.png", id));

    // The artifact on disk is byte-identical to the upload
    let on_disk = std::fs::read(temp_dir.path().join("media").join(&artifact_path)).unwrap();
    assert_eq!(on_disk, sprite);

    // The listing shows the item ready with its artifact
    let response = router
        .clone()
        .oneshot(Request::builder().uri("/items").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let items = body_json(response).await;
    assert_eq!(items[0]["status"], "ready");
    assert_eq!(items[0]["artifact_path"], artifact_path);

    // A finished item never leases again
    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_commit_for_unknown_item_is_404_and_writes_nothing() {
    let (router, temp_dir) = test_router().await;

    let response = router
        .clone()
        .oneshot(commit_request(404, "sprite", "thumb.png", b"orphan"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "item_not_found");

    assert!(!temp_dir.path().join("media").join("sprites").exists());
}

#[tokio::test]
async fn test_commit_without_sprite_field_is_400() {
    let (router, _guard) = test_router().await;

    let id = register_item(&router, "/x/movie.mp4").await;

    // Wrong field name: the handler only accepts 'sprite'
    let response = router
        .clone()
        .oneshot(commit_request(id, "attachment", "thumb.png", b"bytes"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "missing_file");
}

#[tokio::test]
async fn test_reset_requeues_item_over_http() {
    let (router, _guard) = test_router().await;

    let id = register_item(&router, "/x/movie.mp4").await;

    router.clone().oneshot(next_job_request()).await.unwrap();
    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Operator resets the stalled item; it leases again
    let response = router
        .clone()
        .oneshot(json_patch(
            &format!("/items/{}", id),
            r#"{"status": "downloaded"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.clone().oneshot(next_job_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let job = body_json(response).await;
    assert_eq!(job["id"].as_i64().unwrap(), id);
}
