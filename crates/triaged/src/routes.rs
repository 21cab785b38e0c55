//! API routes for triaged.

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{error, info};
use triage_common::rpc::{
    AgentInfo, HealthResponse, ListAgentsResponse, TriageRequest, TriageResponse,
};
use triage_common::Ticket;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Triage Routes
// ============================================================================

pub fn triage_routes() -> Router<AppStateArc> {
    Router::new().route("/triage", post(triage_ticket))
}

async fn triage_ticket(
    State(state): State<AppStateArc>,
    Json(req): Json<TriageRequest>,
) -> Result<Json<TriageResponse>, (StatusCode, String)> {
    let ticket = Ticket {
        ticket_id: req.ticket_id.unwrap_or_else(synthesize_ticket_id),
        subject: req.subject.unwrap_or_default(),
        body: req.body.unwrap_or_default(),
    };
    info!("  Triaging ticket {}", ticket.ticket_id);

    let decision = state.engine.triage(&ticket).await.map_err(|e| {
        error!("  Triage failed for {}: {}", ticket.ticket_id, e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(TriageResponse {
        ticket_id: decision.ticket_id,
        category: decision.category.to_string(),
        method: decision.method.to_string(),
        confidence: round3(decision.confidence),
        priority: decision.priority.to_string(),
        assignee: decision.assignee,
        triage_at: decision.triage_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

/// Local time-derived id for tickets that arrive without one.
fn synthesize_ticket_id() -> String {
    format!("TCK-{}", Utc::now().format("%Y%m%d%H%M%S%3f"))
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let registry = state.engine.registry();
    let agents = registry.read().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model_labels: state.engine.label_count(),
        agents,
    })
}

// ============================================================================
// Agent Routes
// ============================================================================

pub fn agent_routes() -> Router<AppStateArc> {
    Router::new().route("/agents", get(list_agents))
}

async fn list_agents(State(state): State<AppStateArc>) -> Json<ListAgentsResponse> {
    let registry = state.engine.registry();
    let registry = registry.read().await;

    let agents: Vec<AgentInfo> = registry
        .list()
        .iter()
        .map(|agent| AgentInfo {
            id: agent.id.clone(),
            skills: agent.skills.iter().map(|s| s.to_string()).collect(),
            load: agent.load,
        })
        .collect();

    Json(ListAgentsResponse { agents })
}
