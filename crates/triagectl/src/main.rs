//! Triage Control - CLI client for the triage daemon.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "triagectl")]
#[command(about = "Support ticket triage - CLI client", long_about = None)]
#[command(version)]
struct Cli {
    /// Daemon base URL
    #[arg(long, default_value = "http://127.0.0.1:7878")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Triage a ticket and print the decision
    Triage {
        /// Ticket subject
        #[arg(long, default_value = "")]
        subject: String,

        /// Ticket body
        #[arg(long, default_value = "")]
        body: String,

        /// Existing ticket id (the daemon synthesizes one when omitted)
        #[arg(long)]
        ticket_id: Option<String>,
    },

    /// Show daemon health
    Health,

    /// List agents and their current load
    Agents,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Triage {
            subject,
            body,
            ticket_id,
        } => commands::triage(&cli.url, subject, body, ticket_id).await,
        Commands::Health => commands::health(&cli.url).await,
        Commands::Agents => commands::agents(&cli.url).await,
    }
}
