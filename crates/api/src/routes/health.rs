use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether an image generator (API key) is configured.
    pub generator_configured: bool,
}

/// GET /health -- returns service health.
///
/// Reports `degraded` when no generator is configured, since every
/// generation request would fail.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let generator_configured = state.generator.is_some();

    let status = if generator_configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        generator_configured,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
