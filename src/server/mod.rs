//! Development Server
//!
//! Serves the compiled browser bundle (`finlit-ui/dist`) with axum. There are
//! no data endpoints: the dashboard is fully static.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//! - Anything else - a file from the bundle, or `index.html` for unknown paths

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServeError, ServeResult};
pub use state::ServerState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router: health routes plus the static bundle with SPA fallback
pub fn build_router(state: ServerState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::liveness))
        .route("/", get(routes::full_health));

    let assets = ServeDir::new(state.dist_dir()).fallback(ServeFile::new(state.index_path()));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the development server and run until Ctrl+C or SIGTERM
pub async fn serve(config: ServerConfig) -> ServeResult<()> {
    if !config.dist_dir.is_dir() {
        return Err(ServeError::MissingDist(config.dist_dir.clone()));
    }

    let addr = config.addr();
    let dist_dir = config.dist_dir.clone();
    let router = build_router(ServerState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Serving {:?} on http://{}", dist_dir, addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Development server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const INDEX: &str = "<!doctype html><title>Financial Literacy Dashboard</title>";

    fn create_test_app() -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('finlit');").unwrap();

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        (build_router(ServerState::new(config)), dir)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();
        let (status, _) = get_body(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health() {
        let (app, dir) = create_test_app();
        let (status, body) = get_body(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(health["dist_dir"], dir.path().display().to_string());
        assert!(health["uptime_seconds"].is_u64());
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_body(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("finlit"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_body(app, "/insights/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serve_requires_bundle() {
        let config = ServerConfig {
            dist_dir: "/nonexistent/finlit/dist".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(serve(config).await, Err(ServeError::MissingDist(_))));
    }
}
