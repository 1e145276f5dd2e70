//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Body returned by `GET /`.
pub const ROOT_GREETING: &str = "Vulnerable Node.js App - SCA Testing Lab";

/// Status reported by `GET /health`.
pub const HEALTH_STATUS: &str = "running";

/// Message reported by `GET /health`.
pub const HEALTH_MESSAGE: &str =
    "This app has intentionally outdated dependencies for SCA scanning demonstration";

/// Health check response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Always "running".
    pub status: &'static str,
    /// Fixed notice about the outdated dependency set.
    pub message: &'static str,
}

impl HealthResponse {
    /// The one response this service ever reports.
    pub const fn running() -> Self {
        Self {
            status: HEALTH_STATUS,
            message: HEALTH_MESSAGE,
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::running()
    }
}

/// Root greeting handler - plain text.
pub async fn root() -> &'static str {
    ROOT_GREETING
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::running())
}
