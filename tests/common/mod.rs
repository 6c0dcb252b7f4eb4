//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::fs;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use rentrib_site::config::SiteConfig;
use rentrib_site::{build_app, AppState, Catalog};

/// A public directory with a couple of static files.
pub fn public_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("images")).unwrap();
    fs::write(dir.path().join("images/boat.jpg"), b"jpeg bytes").unwrap();
    fs::write(dir.path().join("robots.txt"), "User-agent: *\nAllow: /\n").unwrap();
    dir
}

/// Default configuration serving `public`.
pub fn test_config(public: &TempDir) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.public_dir = public.path().to_string_lossy().into_owned();
    config
}

pub fn test_state(config: SiteConfig) -> AppState {
    AppState::new(config, Catalog::embedded().unwrap())
}

/// The full application over the embedded catalog. Keep the `TempDir`
/// alive for as long as the router is used.
pub fn test_app() -> (Router, TempDir) {
    let public = public_dir();
    let app = build_app(test_state(test_config(&public)));
    (app, public)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
