//! Triage daemon - support ticket triage service.
//!
//! Loads the classifier model, seeds the agent roster, and serves the triage
//! API over HTTP.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, Level};
use triage_common::{LinearModel, PriorityResolver, RuleMatcher, TicketClassifier};
use triaged::agents::AgentRegistry;
use triaged::config::TriagedConfig;
use triaged::engine::TriageEngine;
use triaged::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("triaged v{} starting", env!("CARGO_PKG_VERSION"));

    let config = TriagedConfig::load_or_default();

    // A missing or corrupt model refuses startup: no traffic without a model
    let model = LinearModel::load(&config.model.path)?;
    info!(
        "Loaded model from {} ({} labels)",
        config.model.path,
        model.labels().len()
    );

    let registry = AgentRegistry::from_seeds(&config.agents)?;
    info!("Seeded {} agents", registry.len());

    let engine = TriageEngine::new(
        RuleMatcher::with_default_rules(),
        Arc::new(model),
        PriorityResolver::new(),
        Arc::new(RwLock::new(registry)),
    );

    server::run(AppState::new(engine), &config.server.listen_addr).await
}
