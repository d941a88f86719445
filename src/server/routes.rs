//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Status, version, uptime and the directory being served

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use super::state::ServerState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the bundle's index page exists, `degraded` otherwise
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub dist_dir: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    let status = if state.index_path().is_file() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        dist_dir: state.dist_dir().display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_liveness() {
        assert_eq!(liveness().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_without_bundle_is_degraded() {
        let config = ServerConfig {
            dist_dir: "/nonexistent/finlit/dist".into(),
            ..ServerConfig::default()
        };
        let Json(health) = full_health(State(Arc::new(ServerState::new(config)))).await;
        assert_eq!(health.status, "degraded");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
