//! Ticket category definitions.
//!
//! The category set is open: the rule table and the priority map know the
//! tags below, but the classifier may emit any label it was trained on.
//! Unknown labels are carried as `Other` instead of being rejected.

use serde::{Deserialize, Serialize};

/// A ticket category tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Password,
    Hardware,
    Network,
    ServiceRequest,
    Incident,
    /// A label outside the canonical set (e.g. from a retrained model).
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Password => "Password",
            Self::Hardware => "Hardware",
            Self::Network => "Network",
            Self::ServiceRequest => "ServiceRequest",
            Self::Incident => "Incident",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Password" => Self::Password,
            "Hardware" => Self::Hardware,
            "Network" => Self::Network,
            "ServiceRequest" => Self::ServiceRequest,
            "Incident" => Self::Incident,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
