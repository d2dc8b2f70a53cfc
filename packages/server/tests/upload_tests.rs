//! Upload endpoint limits and filename handling, exercised through the
//! full router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use server_core::server::build_app;
use server_core::Config;
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use tower::ServiceExt;
use uuid::Uuid;

const BOUNDARY: &str = "dashboard-upload-test-boundary";

fn test_app(upload_dir: PathBuf) -> Router {
    // Lazy pool: the upload route never touches the database, and fixture
    // mode keeps the rest of the router off it too.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/monitoring_test")
        .unwrap();
    let config = Config {
        database_url: "postgres://localhost/monitoring_test".to_string(),
        port: 0,
        model_api_key: None,
        model_name: "gemini-1.5-flash".to_string(),
        fallback_model_name: "gemini-1.5-flash-8b".to_string(),
        use_fixture_data: true,
        upload_dir,
    };
    build_app(pool, &config).unwrap()
}

fn temp_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!("kb-uploads-{}", Uuid::new_v4()))
}

fn multipart_request(filename: &str, payload: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/api/knowledge-base/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn accepts_documents_larger_than_the_default_body_limit() {
    let app = test_app(temp_upload_dir());
    let payload = vec![b'a'; 3 * 1024 * 1024];

    let response = app
        .oneshot(multipart_request("report.txt", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rejects_documents_over_the_ten_megabyte_cap() {
    let app = test_app(temp_upload_dir());
    let payload = vec![b'a'; 11 * 1024 * 1024];

    let response = app
        .oneshot(multipart_request("report.txt", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stores_uploads_under_their_base_name() {
    let upload_dir = temp_upload_dir();
    let app = test_app(upload_dir.clone());

    let response = app
        .oneshot(multipart_request("../../outside/report.txt", b"isi laporan"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let stored = body["filename"].as_str().unwrap();
    assert!(stored.ends_with("-report.txt"));
    assert!(!stored.contains('/') && !stored.contains('\\'));
    assert!(upload_dir.join(stored).is_file());
}
