use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of mounted domains.
    pub domains: usize,
    /// Number of echo routes across all domains.
    pub routes: usize,
}

/// GET /health -- service liveness plus catalog size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        domains: state.catalog.len(),
        routes: state.catalog.route_count(),
    })
}

/// Mount health check routes (root level, not under the mount prefix).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
