//! Command handlers for triagectl.

use crate::client::DaemonClient;
use anyhow::Result;

pub async fn triage(
    url: &str,
    subject: String,
    body: String,
    ticket_id: Option<String>,
) -> Result<()> {
    let client = DaemonClient::new(url);
    let decision = client
        .triage(&subject, &body, ticket_id.as_deref())
        .await?;

    println!("Ticket    {}", decision.ticket_id);
    println!(
        "Category  {} ({}, confidence {:.3})",
        decision.category, decision.method, decision.confidence
    );
    println!("Priority  {}", decision.priority);
    println!("Assignee  {}", decision.assignee);
    println!("At        {}", decision.triage_at);
    Ok(())
}

pub async fn health(url: &str) -> Result<()> {
    let client = DaemonClient::new(url);
    let health = client.health().await?;

    println!("Status   {}", health.status);
    println!("Version  {}", health.version);
    println!("Uptime   {}s", health.uptime_seconds);
    println!("Labels   {}", health.model_labels);
    println!("Agents   {}", health.agents);
    Ok(())
}

pub async fn agents(url: &str) -> Result<()> {
    let client = DaemonClient::new(url);
    let roster = client.agents().await?;

    for agent in roster.agents {
        println!(
            "{:<10} load {:<4} skills: {}",
            agent.id,
            agent.load,
            agent.skills.join(", ")
        );
    }
    Ok(())
}
