//! Ticket classification
//!
//! Tries the completion API first and falls back to the deterministic
//! keyword classifier on any failure, so `classify` is total over its
//! input domain: a ticket always comes back classified.

use crate::completion::{CompletionClient, CompletionRequest};
use crate::keyword::KeywordClassifier;
use crate::validate::RawClassification;
use std::sync::Arc;
use ticketflow_core::{
    Category, ChatMessage, Priority, Result, Sentiment, TicketClassification, TicketContent,
};
use tracing::{debug, error, warn};

/// Sampling temperature for classification; low to favor determinism
pub const CLASSIFY_TEMPERATURE: f32 = 0.3;

/// Output-token budget for a classification response
pub const CLASSIFY_MAX_TOKENS: u32 = 500;

const CLASSIFY_SYSTEM_PROMPT: &str =
    "You are a multilingual support ticket classifier. Always respond with valid JSON only.";

/// Which path produced a classification or suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// The completion API returned a usable result
    CompletionApi,
    /// The deterministic keyword/template fallback ran
    Keyword,
}

impl ClassificationSource {
    /// Label used on metrics and audit records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompletionApi => "completion-api",
            Self::Keyword => "keyword",
        }
    }
}

/// A classification together with the path that produced it
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    pub classification: TicketClassification,
    pub source: ClassificationSource,
}

/// AI-first ticket classifier with keyword fallback
pub struct TicketClassifier {
    client: Option<Arc<dyn CompletionClient>>,
    keyword: KeywordClassifier,
}

impl TicketClassifier {
    /// Create a classifier
    ///
    /// `client` is `None` when no completion-API credential is configured;
    /// every classification then runs the keyword path directly, with no
    /// network call possible.
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Result<Self> {
        Ok(Self {
            client,
            keyword: KeywordClassifier::new()?,
        })
    }

    /// Classify ticket content
    ///
    /// Never fails: any completion-API problem degrades to the keyword
    /// classifier.
    pub async fn classify(&self, content: &TicketContent) -> TicketClassification {
        self.classify_outcome(content).await.classification
    }

    /// Classify ticket content, reporting which path produced the result
    pub async fn classify_outcome(&self, content: &TicketContent) -> ClassificationOutcome {
        if let Some(client) = &self.client {
            match self.classify_remote(client.as_ref(), content).await {
                Ok(classification) => {
                    return ClassificationOutcome {
                        classification,
                        source: ClassificationSource::CompletionApi,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "completion api classification failed, using keyword fallback")
                }
            }
        } else {
            warn!("no completion api credential configured, using keyword classification");
        }

        ClassificationOutcome {
            classification: self.keyword.classify(content),
            source: ClassificationSource::Keyword,
        }
    }

    async fn classify_remote(
        &self,
        client: &dyn CompletionClient,
        content: &TicketContent,
    ) -> Result<TicketClassification> {
        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(CLASSIFY_SYSTEM_PROMPT),
                ChatMessage::user(classify_prompt(content)),
            ],
            temperature: CLASSIFY_TEMPERATURE,
            max_tokens: CLASSIFY_MAX_TOKENS,
        };

        let body = client.complete(request).await?;
        debug!(response = %body, "completion api classification response");

        let raw = RawClassification::parse(&body).map_err(|e| {
            error!(raw_response = %body, error = %e, "classification response is not valid JSON");
            e
        })?;

        Ok(raw.into_classification(content.language))
    }
}

/// Build the classification prompt for a ticket
fn classify_prompt(content: &TicketContent) -> String {
    let categories = join_labels(Category::ALL.iter().map(Category::as_str));
    let priorities = join_labels(Priority::ALL.iter().map(Priority::as_str));
    let sentiments = join_labels(Sentiment::ALL.iter().map(Sentiment::as_str));

    format!(
        r#"You are a multilingual AI assistant that classifies customer support tickets. Analyze the following ticket content and provide a structured JSON response.

Ticket Title: "{title}"
Ticket Description: "{description}"
Specified Language: {language}

Provide classification in this exact JSON format:
{{
  "category": "technical",
  "priority": "medium",
  "sentiment": "neutral",
  "urgency_score": 5,
  "suggested_tags": ["support"],
  "confidence": 0.8,
  "reasoning": "Brief explanation",
  "language_detected": "en"
}}

Categories: {categories}
Priorities: {priorities}
Sentiments: {sentiments}

Respond ONLY with valid JSON."#,
        title = content.title,
        description = content.description,
        language = content.language.code(),
    )
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use ticketflow_core::{Error, Language};

    /// Test double returning a fixed body and counting invocations
    struct StaticClient {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl StaticClient {
        fn new(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                body,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for StaticClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.to_string())
        }
    }

    /// Test double simulating a transport failure
    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            Err(Error::completion("completion api returned 503: overloaded"))
        }
    }

    fn ticket() -> TicketContent {
        TicketContent::new(
            "Cannot log in",
            "This is extremely urgent, I need help now",
            Language::En,
        )
    }

    #[tokio::test]
    async fn remote_classification_is_used_when_the_api_answers() {
        let client = StaticClient::new(
            r#"{"category": "technical", "priority": "high", "sentiment": "negative",
                "urgency_score": 7, "suggested_tags": ["login"], "confidence": 0.9,
                "reasoning": "Login failure", "language_detected": "en"}"#,
        );
        let classifier = TicketClassifier::new(Some(client.clone())).unwrap();

        let outcome = classifier.classify_outcome(&ticket()).await;
        assert_eq!(outcome.source, ClassificationSource::CompletionApi);
        assert_eq!(outcome.classification.category, Category::Technical);
        assert_eq!(outcome.classification.priority, Priority::High);
        assert_eq!(outcome.classification.confidence, 0.9);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn partial_model_output_is_defaulted_field_by_field() {
        let client = StaticClient::new(r#"{"category": "feature", "priority": "low"}"#);
        let classifier = TicketClassifier::new(Some(client)).unwrap();

        let classification = classifier.classify(&ticket()).await;
        assert_eq!(classification.category, Category::Feature);
        assert_eq!(classification.priority, Priority::Low);
        assert_eq!(classification.sentiment, Sentiment::Neutral);
        assert_eq!(classification.confidence, crate::validate::DEFAULT_AI_CONFIDENCE);
        assert_eq!(classification.language_detected, "en");
    }

    #[tokio::test]
    async fn malformed_model_output_falls_back_to_keywords() {
        let client = StaticClient::new("Sure! The ticket seems urgent.");
        let classifier = TicketClassifier::new(Some(client.clone())).unwrap();

        let outcome = classifier.classify_outcome(&ticket()).await;
        assert_eq!(outcome.source, ClassificationSource::Keyword);
        assert_eq!(outcome.classification.priority, Priority::Urgent);
        assert_eq!(outcome.classification.confidence, crate::keyword::KEYWORD_CONFIDENCE);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_failure_falls_back_to_keywords() {
        let classifier = TicketClassifier::new(Some(Arc::new(FailingClient))).unwrap();

        let outcome = classifier.classify_outcome(&ticket()).await;
        assert_eq!(outcome.source, ClassificationSource::Keyword);
        assert_eq!(outcome.classification.urgency_score, 8);
    }

    #[tokio::test]
    async fn no_client_means_keyword_classification() {
        let classifier = TicketClassifier::new(None).unwrap();

        let outcome = classifier.classify_outcome(&ticket()).await;
        assert_eq!(outcome.source, ClassificationSource::Keyword);
        assert!(outcome
            .classification
            .suggested_tags
            .contains(&"urgent".to_string()));
    }

    #[tokio::test]
    async fn classification_fields_always_stay_in_their_legal_sets() {
        let bodies = [
            r#"{}"#,
            r#"{"category": "nonsense", "priority": "whenever", "sentiment": "meh"}"#,
            r#"{"urgency_score": 9999, "confidence": 4.2}"#,
        ];

        for body in bodies {
            let classifier =
                TicketClassifier::new(Some(StaticClient::new(body))).unwrap();
            let classification = classifier.classify(&ticket()).await;

            assert!(Category::ALL.contains(&classification.category));
            assert!(Priority::ALL.contains(&classification.priority));
            assert!(Sentiment::ALL.contains(&classification.sentiment));
            assert!((0.0..=1.0).contains(&classification.confidence));
            assert!(!classification.suggested_tags.is_empty());
            assert!(!classification.reasoning.is_empty());
            assert!(!classification.language_detected.is_empty());
        }
    }

    #[test]
    fn prompt_embeds_ticket_content_and_legal_values() {
        let prompt = classify_prompt(&ticket());
        assert!(prompt.contains("Cannot log in"));
        assert!(prompt.contains("Specified Language: en"));
        assert!(prompt.contains("technical, billing, general, feature, bug, support, other"));
        assert!(prompt.contains("low, medium, high, urgent, critical"));
        assert!(prompt.contains("positive, neutral, negative"));
    }
}
