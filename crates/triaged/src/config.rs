//! Configuration for triaged.
//!
//! Loads settings from /etc/triaged/config.toml, then a local triaged.toml,
//! falling back to built-in defaults. A malformed file logs a warning and
//! falls back instead of aborting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// System config file path
pub const CONFIG_PATH: &str = "/etc/triaged/config.toml";

/// Local fallback config path (development)
pub const LOCAL_CONFIG_PATH: &str = "triaged.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP API. Localhost only by default.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:7878".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the trained model artifact. Missing artifact is fatal.
    #[serde(default = "default_model_path")]
    pub path: String,
}

fn default_model_path() -> String {
    "models/triage_model.json".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

/// Seed roster entry. Production deployments replace the seed roster with a
/// persistent store behind the same read/increment contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSeed {
    pub id: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub load: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriagedConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default = "default_agents")]
    pub agents: Vec<AgentSeed>,
}

/// Demo agent pool with the production demo loads.
fn default_agents() -> Vec<AgentSeed> {
    vec![
        AgentSeed {
            id: "Alice".to_string(),
            skills: vec!["Password".to_string(), "Hardware".to_string()],
            load: 2,
        },
        AgentSeed {
            id: "Bob".to_string(),
            skills: vec!["Network".to_string(), "Incident".to_string()],
            load: 1,
        },
        AgentSeed {
            id: "Cara".to_string(),
            skills: vec!["ServiceRequest".to_string(), "Hardware".to_string()],
            load: 0,
        },
    ]
}

impl Default for TriagedConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            model: ModelConfig::default(),
            agents: default_agents(),
        }
    }
}

impl TriagedConfig {
    /// Load config from the usual locations, or defaults.
    pub fn load_or_default() -> Self {
        for path in [CONFIG_PATH, LOCAL_CONFIG_PATH] {
            if Path::new(path).exists() {
                match Self::load_from(path) {
                    Ok(config) => {
                        info!("Loaded config from {}", path);
                        return config;
                    }
                    Err(e) => warn!("Ignoring config at {}: {}", path, e),
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
