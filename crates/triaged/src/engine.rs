//! End-to-end triage pipeline.
//!
//! Rules first; the statistical classifier only runs when no rule fires.
//! Priority and assignment follow unconditionally. A classifier failure
//! surfaces to the caller instead of guessing a category.

use crate::agents::AgentRegistry;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use triage_common::{
    PriorityResolver, RuleMatcher, Ticket, TicketClassifier, TriageDecision, TriageError,
    TriageMethod,
};

/// Confidence reported for rule decisions. Rules are 100%-precision matches.
pub const RULE_CONFIDENCE: f64 = 1.0;

pub struct TriageEngine {
    rules: RuleMatcher,
    classifier: Arc<dyn TicketClassifier>,
    priorities: PriorityResolver,
    registry: Arc<RwLock<AgentRegistry>>,
}

impl TriageEngine {
    pub fn new(
        rules: RuleMatcher,
        classifier: Arc<dyn TicketClassifier>,
        priorities: PriorityResolver,
        registry: Arc<RwLock<AgentRegistry>>,
    ) -> Self {
        Self {
            rules,
            classifier,
            priorities,
            registry,
        }
    }

    /// Triage one ticket: category, priority, assignee, timestamp.
    pub async fn triage(&self, ticket: &Ticket) -> Result<TriageDecision, TriageError> {
        let (category, method, confidence) =
            match self.rules.match_text(&ticket.subject, &ticket.body) {
                Some(category) => (category, TriageMethod::Rule, RULE_CONFIDENCE),
                None => {
                    let (category, confidence) = self.classifier.predict(&ticket.text())?;
                    (category, TriageMethod::Ml, confidence)
                }
            };

        let priority = self
            .priorities
            .resolve(&category, &ticket.subject, &ticket.body);

        // Selection and increment happen under a single write-lock hold
        let assignee = self.registry.write().await.assign(&category)?;

        info!(
            "Triaged {}: {} via {} ({:.3}), priority {}, assigned to {}",
            ticket.ticket_id, category, method, confidence, priority, assignee
        );

        Ok(TriageDecision {
            ticket_id: ticket.ticket_id.clone(),
            category,
            method,
            confidence,
            priority,
            assignee,
            triage_at: Utc::now(),
        })
    }

    pub fn registry(&self) -> Arc<RwLock<AgentRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Number of labels the loaded model knows (health reporting).
    pub fn label_count(&self) -> usize {
        self.classifier.labels().len()
    }
}
