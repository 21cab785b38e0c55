//! HTTP client for the triaged API.

use anyhow::{bail, Context, Result};
use serde_json::json;
use triage_common::rpc::{HealthResponse, ListAgentsResponse, TriageResponse};

pub struct DaemonClient {
    base_url: String,
    http: reqwest::Client,
}

impl DaemonClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn triage(
        &self,
        subject: &str,
        body: &str,
        ticket_id: Option<&str>,
    ) -> Result<TriageResponse> {
        let mut payload = json!({ "subject": subject, "body": body });
        if let Some(id) = ticket_id {
            payload["ticket_id"] = json!(id);
        }

        let response = self
            .http
            .post(format!("{}/triage", self.base_url))
            .json(&payload)
            .send()
            .await
            .context("triaged daemon not reachable")?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            bail!("triage failed: {} {}", status, detail);
        }
        Ok(response.json().await?)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .context("triaged daemon not reachable")?;
        Ok(response.json().await?)
    }

    pub async fn agents(&self) -> Result<ListAgentsResponse> {
        let response = self
            .http
            .get(format!("{}/agents", self.base_url))
            .send()
            .await
            .context("triaged daemon not reachable")?;
        Ok(response.json().await?)
    }
}
