//! Agent-facing response suggestion
//!
//! Drafts a reply in the ticket's language via the completion API; on any
//! failure, falls back to a canned per-language template. Like
//! classification, the operation is total and never errors outward.

use crate::classifier::ClassificationSource;
use crate::completion::{CompletionClient, CompletionRequest};
use crate::lexicon;
use std::sync::Arc;
use ticketflow_core::{ChatMessage, Language, Result, TicketClassification, TicketContent};
use tracing::warn;

/// Sampling temperature for suggestions; higher than classification to
/// favor natural phrasing
pub const SUGGEST_TEMPERATURE: f32 = 0.7;

/// Output-token budget for a suggested reply
pub const SUGGEST_MAX_TOKENS: u32 = 300;

const SUGGEST_SYSTEM_PROMPT: &str =
    "You are a multilingual customer support assistant. Provide helpful, empathetic responses.";

/// A suggested reply together with the path that produced it
#[derive(Debug, Clone)]
pub struct SuggestionOutcome {
    pub text: String,
    pub source: ClassificationSource,
}

/// Drafts suggested replies for agents
pub struct ResponseSuggester {
    client: Option<Arc<dyn CompletionClient>>,
}

impl ResponseSuggester {
    /// Create a suggester; `None` means every suggestion uses the template
    /// fallback without any network call
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Suggest a reply for a classified ticket
    pub async fn suggest(
        &self,
        content: &TicketContent,
        classification: &TicketClassification,
    ) -> String {
        self.suggest_outcome(content, classification).await.text
    }

    /// Suggest a reply, reporting which path produced it
    pub async fn suggest_outcome(
        &self,
        content: &TicketContent,
        classification: &TicketClassification,
    ) -> SuggestionOutcome {
        if let Some(client) = &self.client {
            match self.suggest_remote(client.as_ref(), content, classification).await {
                Ok(text) => {
                    return SuggestionOutcome {
                        text,
                        source: ClassificationSource::CompletionApi,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "completion api suggestion failed, using template fallback")
                }
            }
        } else {
            warn!("no completion api credential configured, using template response");
        }

        SuggestionOutcome {
            text: self.fallback(content, classification),
            source: ClassificationSource::Keyword,
        }
    }

    async fn suggest_remote(
        &self,
        client: &dyn CompletionClient,
        content: &TicketContent,
        classification: &TicketClassification,
    ) -> Result<String> {
        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(SUGGEST_SYSTEM_PROMPT),
                ChatMessage::user(suggest_prompt(content, classification)),
            ],
            temperature: SUGGEST_TEMPERATURE,
            max_tokens: SUGGEST_MAX_TOKENS,
        };

        client.complete(request).await
    }

    /// Select the canned template for the ticket's language and priority
    fn fallback(&self, content: &TicketContent, classification: &TicketClassification) -> String {
        let language = Language::from_code(&classification.language_detected)
            .unwrap_or(content.language);
        let templates = lexicon::response_templates(language);

        let text = if classification.priority.is_escalated() {
            templates.urgent
        } else {
            templates.standard
        };
        text.to_string()
    }
}

/// Build the suggestion prompt for a classified ticket
fn suggest_prompt(content: &TicketContent, classification: &TicketClassification) -> String {
    let language = Language::from_code(&classification.language_detected)
        .unwrap_or(content.language);

    format!(
        r#"You are a helpful multilingual customer support assistant. Based on the ticket, suggest a professional response.

Ticket Title: "{title}"
Ticket Description: "{description}"
Category: {category}
Priority: {priority}
Sentiment: {sentiment}
Language: {code}

Generate a helpful, empathetic response in {language_name}.
The response should:
1. Acknowledge the issue
2. Express empathy if needed
3. Provide next steps or solution
4. Be professional and concise

Response:"#,
        title = content.title,
        description = content.description,
        category = classification.category,
        priority = classification.priority,
        sentiment = classification.sentiment,
        code = language.code(),
        language_name = language.english_name(),
    )
}
