//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use ticketflow_ai::AiConfig;

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Completion-API settings
    #[serde(default)]
    pub ai: AiConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(base_url) = &cli.base_url {
            config.ai.base_url = base_url.clone();
        }

        if let Some(model) = &cli.model {
            config.ai.model = model.clone();
        }

        Ok(config)
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum classification records retained in memory
    #[serde(default = "default_audit_capacity")]
    pub capacity: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            capacity: default_audit_capacity(),
        }
    }
}

fn default_audit_capacity() -> usize {
    1000
}
