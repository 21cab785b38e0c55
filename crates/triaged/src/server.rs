//! HTTP server for triaged.

use crate::engine::TriageEngine;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub engine: TriageEngine,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: TriageEngine) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
        }
    }
}

/// Build the API router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::triage_routes())
        .merge(routes::health_routes())
        .merge(routes::agent_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, listen_addr: &str) -> Result<()> {
    let state = Arc::new(state);
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!("  Listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
