//! Completion-API configuration

use serde::{Deserialize, Serialize};

/// Environment variable consulted when the config file carries no API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Marker left in place by the sample configuration; a key containing it is
/// treated as no key at all
const PLACEHOLDER_MARKER: &str = "your_groq_api_key";

/// Completion-API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Base URL of the OpenAI-compatible completion API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model requested for classification, suggestion, and chat
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer credential; falls back to the `GROQ_API_KEY` environment
    /// variable when unset
    #[serde(default)]
    pub api_key: Option<String>,
}

impl AiConfig {
    /// Resolve the credential from config or environment, rejecting empty
    /// and placeholder values
    ///
    /// `None` means the completion API is unavailable and the deterministic
    /// fallback paths run without attempting any network call.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !is_placeholder(key))
    }

    /// Whether a usable credential is configured
    pub fn has_credential(&self) -> bool {
        self.resolved_api_key().is_some()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
        }
    }
}

fn is_placeholder(key: &str) -> bool {
    let key = key.trim();
    key.is_empty() || key.contains(PLACEHOLDER_MARKER)
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}
