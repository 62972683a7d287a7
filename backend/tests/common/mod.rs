//! Common test utilities for integration tests
//!
//! This module provides a router wired exactly like the server's, driven
//! in-process through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use calorie_advisor_backend::{
    config::{AppConfig, ServerConfig, UiConfig},
    render::DisplayMode,
    routes,
    state::AppState,
};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with the default display mode
    pub fn new() -> Self {
        Self::with_display_mode(DisplayMode::Dark)
    }

    /// Create a new test application with a specific default display mode
    pub fn with_display_mode(mode: DisplayMode) -> Self {
        let state = AppState::new(test_config(mode));
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with a url-encoded form body
    pub async fn post_form(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config(mode: DisplayMode) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        ui: UiConfig {
            default_display_mode: mode,
            ..UiConfig::default()
        },
    }
}
