//! Shared types and decision components for the triage service.

pub mod category;
pub mod classifier;
pub mod error;
pub mod priority;
pub mod rpc;
pub mod rules;
pub mod ticket;

pub use category::Category;
pub use classifier::{LinearModel, ModelArtifact, TicketClassifier};
pub use error::TriageError;
pub use priority::PriorityResolver;
pub use rules::{RuleEntry, RuleMatcher};
pub use ticket::{Priority, Ticket, TriageDecision, TriageMethod};
