#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use rakuda_api::config::{LogFormat, ServerConfig};
use rakuda_api::router::build_app_router;
use rakuda_api::state::AppState;
use rakuda_core::catalog::Catalog;
use rakuda_core::manifest::Manifest;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        mount_prefix: "/api".to_string(),
        catalog_path: None,
        log_format: LogFormat::Pretty,
    }
}

/// Full application router over the built-in catalog, with the same
/// middleware stack production uses.
pub fn build_test_app() -> Router {
    build_test_app_with(Catalog::builtin().unwrap(), test_config())
}

pub fn build_test_app_with(catalog: Catalog, config: ServerConfig) -> Router {
    let state = AppState::new(config.clone(), catalog);
    build_app_router(state, &config)
}

/// Router over a catalog built from an inline manifest.
pub fn build_manifest_app(manifest: &str) -> Router {
    let catalog = Manifest::parse(manifest).unwrap().into_catalog().unwrap();
    build_test_app_with(catalog, test_config())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string())).await
}

/// Send a request whose body is taken verbatim.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> Response {
    send(app, method, uri, Body::from(body)).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
