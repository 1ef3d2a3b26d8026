//! Support-chat assistant
//!
//! Conversational Q&A about the product, independent of ticket
//! classification but served by the same completion API. Without a
//! credential, or on any API failure, a keyword-routed canned answer is
//! returned instead, so the chat endpoint never fails either.

use crate::completion::{CompletionClient, CompletionRequest};
use std::sync::Arc;
use ticketflow_core::ChatMessage;
use tracing::warn;

/// Sampling temperature for chat replies
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Output-token budget for a chat reply
pub const CHAT_MAX_TOKENS: u32 = 1000;

/// Conversational assistant for the support portal
pub struct SupportAssistant {
    client: Option<Arc<dyn CompletionClient>>,
}

impl SupportAssistant {
    /// Create an assistant; `None` means every answer is a canned fallback
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Answer a user message
    ///
    /// `ticket_context` is an optional pre-rendered block describing the
    /// ticket the user is currently viewing; the caller owns its shape.
    pub async fn answer(&self, message: &str, ticket_context: Option<&str>) -> String {
        if let Some(client) = &self.client {
            let request = CompletionRequest {
                messages: vec![
                    ChatMessage::system(system_prompt(ticket_context)),
                    ChatMessage::user(message),
                ],
                temperature: CHAT_TEMPERATURE,
                max_tokens: CHAT_MAX_TOKENS,
            };

            match client.complete(request).await {
                Ok(text) => return text,
                Err(e) => warn!(error = %e, "completion api chat failed, using canned answer"),
            }
        } else {
            warn!("no completion api credential configured, using canned chat answer");
        }

        fallback_answer(message).to_string()
    }
}

/// Build the product system prompt, optionally with ticket context
fn system_prompt(ticket_context: Option<&str>) -> String {
    let mut prompt = String::from(
        "You are a helpful AI assistant for a multilingual ticket support system. You help users with:
- Creating and managing support tickets
- Understanding ticket statuses and priorities
- Providing guidance on system features
- Answering questions about the support process
- Multilingual support (English, Hindi, Tamil, Telugu, Kannada)

Key features you can help with:
1. Ticket Creation: Users can create tickets via text or voice input
2. Speech-to-Text: Voice input supports multiple languages
3. AI Classification: Tickets are automatically categorized and prioritized
4. Status Tracking: open, in_progress, resolved, closed
5. Priority Levels: low, medium, high, urgent, critical
6. Categories: technical, billing, general, feature, bug, support, other

Be helpful, concise, and professional. Respond in the user's preferred language when possible.",
    );

    if let Some(context) = ticket_context {
        prompt.push_str("\n\nCurrent ticket context:\n");
        prompt.push_str(context);
    }

    prompt
}

/// Keyword-routed canned answer used when the completion API is unavailable
fn fallback_answer(message: &str) -> &'static str {
    let message = message.to_lowercase();

    if message.contains("ticket") || message.contains("create") {
        return "To create a new ticket, click the 'New Ticket' button in your dashboard. You can fill in the title and description, or use voice input for multilingual support. The AI will automatically classify and prioritize your ticket.";
    }

    if message.contains("status") || message.contains("track") {
        return "You can track your tickets in the dashboard. Tickets have different statuses: 'open' (newly created), 'in_progress' (being worked on), 'resolved' (solution provided), and 'closed' (completed).";
    }

    if message.contains("language") || message.contains("multilingual") {
        return "Our system supports 5 languages: English, Hindi (हिंदी), Tamil (தமிழ்), Telugu (తెలుగు), and Kannada (ಕನ್ನಡ). Use the language switcher in the header to change your preference. You can also create tickets using voice input in any of these languages.";
    }

    if message.contains("voice") || message.contains("speech") {
        return "You can use voice input to create tickets! Click the microphone icon in the ticket creation form, allow microphone permissions, and speak your issue. The system supports speech recognition in multiple languages.";
    }

    if message.contains("priority") || message.contains("urgent") {
        return "Ticket priorities are: Low (feature requests), Medium (general questions), High (important issues), Urgent (major problems), and Critical (system down). The AI automatically assigns priority, but you can adjust it when creating tickets.";
    }

    if message.contains("admin") || message.contains("dashboard") {
        return "Admins have access to a comprehensive dashboard with analytics, user management, and system settings. You can view ticket statistics, AI performance metrics, and manage user roles from the admin panel.";
    }

    "I'm here to help you with the ticket management system! You can ask me about creating tickets, checking status, using voice input, language support, or navigating the dashboard. What would you like to know?"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ticketflow_core::{Error, Result};

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Err(Error::completion("completion api returned 500"))
        }
    }

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, request: CompletionRequest) -> Result<String> {
            Ok(request.messages.last().map(|m| m.content.clone()).unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn canned_answers_are_routed_by_topic() {
        let assistant = SupportAssistant::new(None);

        let answer = assistant.answer("How do I create a ticket?", None).await;
        assert!(answer.contains("New Ticket"));

        let answer = assistant.answer("what STATUS is my request in", None).await;
        assert!(answer.contains("in_progress"));

        let answer = assistant.answer("which languages are supported?", None).await;
        assert!(answer.contains("Kannada"));

        let answer = assistant.answer("tell me a joke", None).await;
        assert!(answer.contains("I'm here to help"));
    }

    #[tokio::test]
    async fn api_failure_degrades_to_canned_answer() {
        let assistant = SupportAssistant::new(Some(Arc::new(FailingClient)));
        let answer = assistant.answer("how do priorities work?", None).await;
        assert!(answer.contains("Critical (system down)"));
    }

    #[tokio::test]
    async fn api_answer_is_returned_when_available() {
        let assistant = SupportAssistant::new(Some(Arc::new(EchoClient)));
        let answer = assistant.answer("hello there", None).await;
        assert_eq!(answer, "hello there");
    }

    #[test]
    fn ticket_context_is_appended_to_the_system_prompt() {
        let prompt = system_prompt(Some("- Title: Login broken\n- Status: open"));
        assert!(prompt.contains("Current ticket context:"));
        assert!(prompt.contains("Login broken"));

        let bare = system_prompt(None);
        assert!(!bare.contains("Current ticket context:"));
    }
}
