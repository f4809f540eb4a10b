//! Dashboard HTTP server

use axum::{
    Router,
    routing::{get, post},
};
use duel_application::RunComparisonUseCase;
use duel_domain::MetricsCatalog;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{
    AppState, compare, get_metrics, health_check, index, list_metrics, list_subjects,
};

/// Errors that stop the dashboard server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the dashboard router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/subjects", get(list_subjects))
        .route("/api/metrics", get(list_metrics))
        .route("/api/metrics/:subject", get(get_metrics))
        .route("/api/compare", post(compare))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the evaluation dashboard and the live comparison API
pub struct DashboardServer {
    host: String,
    port: u16,
    state: Arc<AppState>,
}

impl DashboardServer {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        comparison: Arc<RunComparisonUseCase>,
        catalog: Arc<MetricsCatalog>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            state: Arc::new(AppState {
                comparison,
                catalog,
            }),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Bind and serve until the process is stopped
    pub async fn run(&self) -> Result<(), ServerError> {
        let addr = self.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        info!(
            cloud = %self.state.comparison.cloud_model(),
            local = %self.state.comparison.local_model(),
            mode = %self.state.comparison.mode(),
            "Dashboard listening on http://{}",
            addr
        );

        axum::serve(listener, router(self.state.clone()))
            .await
            .map_err(ServerError::Serve)
    }
}
