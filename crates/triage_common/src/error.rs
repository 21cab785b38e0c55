//! Error types for the triage service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Model not found at {0}. Deploy a trained model artifact first.")]
    ModelNotFound(String),

    #[error("Model artifact is invalid: {0}")]
    ModelInvalid(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Rule error: {0}")]
    Rule(String),

    #[error("Agent registry is empty; cannot assign tickets")]
    EmptyRegistry,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
