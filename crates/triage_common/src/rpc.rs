//! Wire types shared by the daemon routes and the CLI client.

use serde::{Deserialize, Deserializer, Serialize};

/// Incoming triage request. All fields are optional; absent, null, or
/// non-text subject/body values are treated as empty text rather than
/// rejected (lenient parsing).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ticket_id: Option<String>,
}

/// Wire form of a triage decision. `confidence` is rounded to 3 decimal
/// places; `triage_at` is ISO-8601 UTC with a trailing "Z".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResponse {
    pub ticket_id: String,
    pub category: String,
    pub method: String,
    pub confidence: f64,
    pub priority: String,
    pub assignee: String,
    pub triage_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model_labels: usize,
    pub agents: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    pub skills: Vec<String>,
    pub load: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAgentsResponse {
    pub agents: Vec<AgentInfo>,
}

/// Accept any JSON value; only strings survive, everything else (numbers,
/// null, objects) becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_none() {
        let req: TriageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.subject.is_none());
        assert!(req.body.is_none());
        assert!(req.ticket_id.is_none());
    }

    #[test]
    fn test_non_text_fields_are_lenient() {
        let req: TriageRequest =
            serde_json::from_str(r#"{"subject": 42, "body": null, "ticket_id": ["x"]}"#).unwrap();
        assert!(req.subject.is_none());
        assert!(req.body.is_none());
        assert!(req.ticket_id.is_none());
    }

    #[test]
    fn test_text_fields_pass_through() {
        let req: TriageRequest =
            serde_json::from_str(r#"{"subject": "vpn down", "ticket_id": "T-9"}"#).unwrap();
        assert_eq!(req.subject.as_deref(), Some("vpn down"));
        assert_eq!(req.ticket_id.as_deref(), Some("T-9"));
    }
}
