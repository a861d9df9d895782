//! HTTP-level integration tests for preview image upload and download.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, get};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "showcase-test-boundary";

fn multipart_request(filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/storage/images")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_then_download(pool: PgPool) {
    // Upload and download must share a storage dir, so reuse one router.
    let app = common::build_test_app(pool);

    let response = app
        .clone()
        .oneshot(multipart_request("shot.png", b"fake png bytes"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let image_id = body_json(response).await["data"]["image_id"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(image_id.ends_with(".png"));

    let response = get(app, &format!("/api/v1/storage/images/{image_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"fake png bytes");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_rejects_unsupported_type(pool: PgPool) {
    let response = common::build_test_app(pool)
        .oneshot(multipart_request("notes.txt", b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_image_is_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/storage/images/7b0c1d2e-3f40-4a5b-8c6d-7e8f90a1b2c3.png",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
