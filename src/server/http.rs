//! HTTP server implementation for the event log.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::signal;

use super::config::ServerConfig;
use super::handlers::{
    AppState, handle_clear, handle_create, handle_healthy, handle_list, handle_metrics,
    handle_quick, handle_ready, handle_stats,
};
use super::metrics::Metrics;
use super::middleware::{MetricsLayer, TracingLayer};
use crate::EventLog;

/// HTTP server for the event-log service.
pub struct HttpServer {
    log: Arc<EventLog>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new server.
    pub fn new(log: Arc<EventLog>, config: ServerConfig) -> Self {
        Self { log, config }
    }

    /// Run the HTTP server until a shutdown signal arrives.
    pub async fn run(self) {
        // Create metrics registry and register store-level metrics
        let mut metrics = Metrics::new();
        self.log.register_metrics(metrics.registry_mut());
        let metrics = Arc::new(metrics);

        let state = AppState {
            log: self.log,
            metrics: metrics.clone(),
        };

        // Build router with routes and middleware
        let app = Router::new()
            .route(
                "/api/v1/log/entries",
                post(handle_create).get(handle_list).delete(handle_clear),
            )
            .route("/api/v1/log/stats", get(handle_stats))
            .route("/quick", get(handle_quick))
            .route("/metrics", get(handle_metrics))
            .route("/-/healthy", get(handle_healthy))
            .route("/-/ready", get(handle_ready))
            .layer(TracingLayer::new())
            .layer(MetricsLayer::new(metrics))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        tracing::info!("Starting event-log HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .unwrap();

        tracing::info!("Server shut down gracefully");
    }
}

/// Listen for SIGTERM (pod termination) and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
