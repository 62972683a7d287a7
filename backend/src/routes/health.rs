//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe
//! - /health/live - Liveness probe (always returns OK if server is running)

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

fn respond(status: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    respond("healthy")
}

/// Readiness probe
///
/// The calculator has no external dependencies, so the service is ready
/// as soon as it accepts connections.
pub async fn readiness_check() -> Json<HealthResponse> {
    respond("ready")
}

/// Liveness probe - checks if the service is alive
pub async fn liveness_check() -> Json<HealthResponse> {
    respond("alive")
}
