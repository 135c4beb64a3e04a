#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pantry_core::store::MemoryStore;
use tower::ServiceExt;

use pantry_api::config::ServerConfig;
use pantry_api::router::build_app_router;
use pantry_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        upload_limit_bytes: None,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack. Callers keep their own `Arc` to the store to issue
/// several requests against shared state.
pub fn build_test_app_with(store: Arc<MemoryStore>, config: ServerConfig) -> Router {
    let config = Arc::new(config);
    let state = AppState::new(Arc::clone(&config), store);
    build_app_router(state, &config)
}

/// A router over a fresh seeded in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::seeded()), test_config())
}

/// A fresh seeded store to share across several routers.
pub fn seeded_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::seeded())
}

/// A router over a shared store with the default test config.
pub fn app(store: &Arc<MemoryStore>) -> Router {
    build_test_app_with(Arc::clone(store), test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Multipart boundary used by [`post_multipart`].
pub const BOUNDARY: &str = "pantry-test-boundary";

/// POST a single-part multipart body.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    field: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"upload.bin\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a recipe and return its id.
pub async fn create_recipe(store: &Arc<MemoryStore>, body: serde_json::Value) -> i64 {
    let response = post_json(app(store), "/api/v1/recipes", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
