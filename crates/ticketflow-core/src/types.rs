//! Core types for Ticketflow

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Ticket category assigned during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Billing,
    General,
    Feature,
    Bug,
    Support,
    Other,
}

impl Category {
    /// All legal categories, in the order presented to the completion API
    pub const ALL: [Category; 7] = [
        Category::Technical,
        Category::Billing,
        Category::General,
        Category::Feature,
        Category::Bug,
        Category::Support,
        Category::Other,
    ];

    /// The lowercase wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::General => "general",
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Support => "support",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket priority assigned during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Critical,
}

impl Priority {
    /// All legal priorities, in ascending order of severity
    pub const ALL: [Priority; 5] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
        Priority::Critical,
    ];

    /// The lowercase wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Critical => "critical",
        }
    }

    /// Whether this priority warrants the escalated response path
    pub fn is_escalated(&self) -> bool {
        matches!(self, Self::Urgent | Self::Critical)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment detected in the ticket text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All legal sentiments
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// The lowercase wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ticket text handed to the classifier and suggester
///
/// Constructed fresh per request by the caller; nothing here is persisted
/// by this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketContent {
    /// Ticket title
    pub title: String,

    /// Ticket description
    pub description: String,

    /// Declared ticket language
    #[serde(default)]
    pub language: Language,
}

impl TicketContent {
    /// Create new ticket content
    pub fn new(title: impl Into<String>, description: impl Into<String>, language: Language) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            language,
        }
    }

    /// Title and description joined for keyword scanning
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Structured classification produced for a ticket
///
/// Invariant: every field carries a value. Both the completion-API path and
/// the keyword fallback backfill defaults before returning, so consumers
/// never see a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketClassification {
    /// Assigned category
    pub category: Category,

    /// Assigned priority
    pub priority: Priority,

    /// Detected sentiment
    pub sentiment: Sentiment,

    /// Fine-grained severity heuristic, intended range 1-10
    pub urgency_score: u8,

    /// Suggested tags, never empty
    pub suggested_tags: Vec<String>,

    /// Confidence in [0, 1]; fixed at 0.6 on the keyword path
    pub confidence: f32,

    /// Free-text explanation of the classification
    pub reasoning: String,

    /// Detected locale code, defaulting to the declared ticket language
    pub language_detected: String,
}

impl TicketClassification {
    /// Tag applied when no classification rule produced one
    pub const PLACEHOLDER_TAG: &'static str = "needs-review";
}

/// A chat message sent to the completion API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_lowercase_labels() {
        assert_eq!(serde_json::to_string(&Category::Bug).unwrap(), "\"bug\"");
        assert_eq!(serde_json::to_string(&Priority::Urgent).unwrap(), "\"urgent\"");
        assert_eq!(serde_json::to_string(&Sentiment::Neutral).unwrap(), "\"neutral\"");

        let category: Category = serde_json::from_str("\"billing\"").unwrap();
        assert_eq!(category, Category::Billing);
    }

    #[test]
    fn escalated_priorities() {
        assert!(Priority::Urgent.is_escalated());
        assert!(Priority::Critical.is_escalated());
        assert!(!Priority::High.is_escalated());
        assert!(!Priority::Medium.is_escalated());
        assert!(!Priority::Low.is_escalated());
    }

    #[test]
    fn combined_text_joins_title_and_description() {
        let content = TicketContent::new("Login broken", "Cannot sign in", Language::En);
        assert_eq!(content.combined_text(), "Login broken Cannot sign in");
    }

    #[test]
    fn classification_round_trips_through_json() {
        let classification = TicketClassification {
            category: Category::Bug,
            priority: Priority::Urgent,
            sentiment: Sentiment::Negative,
            urgency_score: 8,
            suggested_tags: vec!["technical-issue".to_string()],
            confidence: 0.6,
            reasoning: "Classification based on keyword analysis".to_string(),
            language_detected: "en".to_string(),
        };

        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json["category"], "bug");
        assert_eq!(json["urgency_score"], 8);

        let back: TicketClassification = serde_json::from_value(json).unwrap();
        assert_eq!(back, classification);
    }
}
