//! Completion-API client
//!
//! One OpenAI-compatible chat-completions endpoint serves classification,
//! response suggestion, and the support chat. The client is injected into
//! each consumer behind [`CompletionClient`], so tests substitute doubles
//! and the no-credential configuration simply constructs no client at all.

use crate::config::AiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ticketflow_core::{ChatMessage, Error, Result};
use tracing::debug;

/// Parameters for a single completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation handed to the model
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature; classification runs low to favor determinism
    pub temperature: f32,

    /// Output-token budget
    pub max_tokens: u32,
}

/// A chat-completion backend
///
/// Exactly one request per call, no retries and no streaming. Errors are
/// reported to the caller, which degrades to its deterministic fallback.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion request and return the assistant message text
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// Wire format of the chat-completions request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_completion_tokens: u32,
    top_p: f32,
    stream: bool,
}

/// Wire format of the chat-completions response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTPS client for an OpenAI-compatible completion API
pub struct HttpCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpCompletionClient {
    /// Create a client against an endpoint
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a client from configuration
    ///
    /// Returns `None` when no usable credential is configured, in which
    /// case consumers run their fallback paths without touching the
    /// network.
    pub fn from_config(http: reqwest::Client, config: &AiConfig) -> Option<Self> {
        let api_key = config.resolved_api_key()?;
        Some(Self::new(http, config.base_url.clone(), api_key, config.model.clone()))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_completion_tokens: request.max_tokens,
            top_p: 1.0,
            stream: false,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::completion(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::completion(format!(
                "completion api returned {status}: {body}"
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::completion(format!("invalid response body: {e}")))?;

        debug!(model = %self.model, "completion request succeeded");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| Error::completion("no message content in completion response"))
    }
}
