//! Validation of completion-API classification output
//!
//! The model is instructed to return a fixed-shape JSON object, but its
//! output is untrusted. Parsing runs in two explicit steps: the body must
//! be valid JSON (a malformed body aborts the remote path and triggers the
//! keyword fallback), then each field is extracted leniently into a
//! [`RawClassification`] and defaulted, so a single missing or mistyped
//! field never discards the rest of the object.

use serde::de::DeserializeOwned;
use serde_json::Value;
use ticketflow_core::{
    Category, Language, Priority, Result, Sentiment, TicketClassification,
};

/// Urgency score substituted when the model omits or mistypes the field
pub const DEFAULT_URGENCY_SCORE: u8 = 5;

/// Confidence substituted when the model omits or mistypes the field
pub const DEFAULT_AI_CONFIDENCE: f32 = 0.7;

const DEFAULT_AI_REASONING: &str = "AI classification completed";

/// A leniently-extracted classification, one `Option` per expected field
///
/// `None` means the field was absent or of an unexpected type; defaulting
/// happens in [`RawClassification::into_classification`].
#[derive(Debug, Default)]
pub struct RawClassification {
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub sentiment: Option<Sentiment>,
    pub urgency_score: Option<u8>,
    pub suggested_tags: Option<Vec<String>>,
    pub confidence: Option<f32>,
    pub reasoning: Option<String>,
    pub language_detected: Option<String>,
}

impl RawClassification {
    /// Parse a completion-API response body
    ///
    /// Fails only when the body is not JSON at all; field-level problems
    /// are absorbed into `None`s.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body.trim())?;
        Ok(Self::from_value(&value))
    }

    /// Extract each expected field from an already-parsed JSON value
    pub fn from_value(value: &Value) -> Self {
        Self {
            category: field(value, "category"),
            priority: field(value, "priority"),
            sentiment: field(value, "sentiment"),
            urgency_score: value
                .get("urgency_score")
                .and_then(Value::as_u64)
                .and_then(|n| u8::try_from(n).ok()),
            suggested_tags: value
                .get("suggested_tags")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(|tag| tag.as_str().map(str::to_string))
                        .collect::<Vec<_>>()
                })
                .filter(|tags| !tags.is_empty()),
            confidence: value.get("confidence").and_then(Value::as_f64).map(|c| c as f32),
            reasoning: non_empty_string(value, "reasoning"),
            language_detected: non_empty_string(value, "language_detected"),
        }
    }

    /// Backfill defaults into a complete classification
    ///
    /// `declared_language` seeds `language_detected` when the model did not
    /// report one. Confidence is clamped into [0, 1].
    pub fn into_classification(self, declared_language: Language) -> TicketClassification {
        TicketClassification {
            category: self.category.unwrap_or(Category::General),
            priority: self.priority.unwrap_or(Priority::Medium),
            sentiment: self.sentiment.unwrap_or(Sentiment::Neutral),
            urgency_score: self.urgency_score.unwrap_or(DEFAULT_URGENCY_SCORE),
            suggested_tags: self
                .suggested_tags
                .unwrap_or_else(|| vec![TicketClassification::PLACEHOLDER_TAG.to_string()]),
            confidence: self.confidence.unwrap_or(DEFAULT_AI_CONFIDENCE).clamp(0.0, 1.0),
            reasoning: self.reasoning.unwrap_or_else(|| DEFAULT_AI_REASONING.to_string()),
            language_detected: self
                .language_detected
                .unwrap_or_else(|| declared_language.code().to_string()),
        }
    }
}

/// Extract a typed field, treating a type mismatch like an absent field
fn field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}

fn non_empty_string(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
