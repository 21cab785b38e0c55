//! Ticket and triage decision types.

use crate::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An incoming support ticket. Ephemeral: built per request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID (synthesized by the HTTP layer when absent)
    pub ticket_id: String,
    /// Free-text subject line
    #[serde(default)]
    pub subject: String,
    /// Free-text body
    #[serde(default)]
    pub body: String,
}

impl Ticket {
    pub fn new(
        ticket_id: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Subject and body joined with a single space. The classifier always
    /// sees this exact form, even when both fields are empty.
    pub fn text(&self) -> String {
        format!("{} {}", self.subject, self.body)
    }
}

/// How a triage decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageMethod {
    /// Matched a high-precision rule pattern
    Rule,
    /// Fell through to the statistical classifier
    Ml,
}

impl std::fmt::Display for TriageMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rule => write!(f, "rule"),
            Self::Ml => write!(f, "ml"),
        }
    }
}

/// Ticket priority. Variant order is the escalation order, so `Ord` makes
/// "never downgrade" a simple `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// The outcome of triaging one ticket. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageDecision {
    pub ticket_id: String,
    pub category: Category,
    pub method: TriageMethod,
    /// Probability mass behind `category`: 1.0 for rule decisions, the
    /// classifier's reported probability otherwise.
    pub confidence: f64,
    pub priority: Priority,
    /// Id of the agent charged with the ticket
    pub assignee: String,
    pub triage_at: DateTime<Utc>,
}
