use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::SERVICE_NAME;
use crate::state::AppState;

/// Health check response payload, shared by both roles.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Process role (`gateway` or `handler`).
    pub role: &'static str,
    /// Service identity for container orchestration.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- handler-role health, degrades when the database is
/// unreachable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = pointcloud_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "healthy" } else { "degraded" },
        role: state.config.role.as_str(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
