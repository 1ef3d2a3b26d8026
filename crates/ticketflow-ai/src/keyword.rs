//! Keyword-based fallback classification
//!
//! A lexicon-driven classifier used when the completion API is not
//! configured or fails. Deterministic: the same ticket text and language
//! always produce the same classification.

use crate::lexicon;
use aho_corasick::AhoCorasick;
use std::collections::HashMap;
use ticketflow_core::{
    Category, Error, Language, Priority, Result, Sentiment, TicketClassification, TicketContent,
};

/// Confidence reported for keyword-based results, signalling lower trust
/// than a completion-API classification
pub const KEYWORD_CONFIDENCE: f32 = 0.6;

/// Urgency score assigned when an urgency trigger word matches
pub const URGENT_URGENCY_SCORE: u8 = 8;

/// Urgency score assigned when no urgency trigger word matches
pub const DEFAULT_URGENCY_SCORE: u8 = 5;

const KEYWORD_REASONING: &str = "Classification based on keyword analysis";

/// Pre-built trigger-word matchers for one language
struct LanguageMatchers {
    urgent: AhoCorasick,
    technical: AhoCorasick,
    billing: AhoCorasick,
}

impl LanguageMatchers {
    fn new(language: Language) -> Result<Self> {
        let set = lexicon::keywords(language);
        Ok(Self {
            urgent: build_matcher(set.urgent)?,
            technical: build_matcher(set.technical)?,
            billing: build_matcher(set.billing)?,
        })
    }
}

/// Deterministic multilingual keyword classifier
pub struct KeywordClassifier {
    english: LanguageMatchers,
    by_language: HashMap<Language, LanguageMatchers>,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl KeywordClassifier {
    /// Build matchers for every supported language
    pub fn new() -> Result<Self> {
        let mut by_language = HashMap::new();
        for language in Language::ALL {
            by_language.insert(language, LanguageMatchers::new(language)?);
        }

        Ok(Self {
            english: LanguageMatchers::new(Language::En)?,
            by_language,
            positive: build_matcher(lexicon::POSITIVE_WORDS)?,
            negative: build_matcher(lexicon::NEGATIVE_WORDS)?,
        })
    }

    /// Classify ticket content from its trigger words alone
    pub fn classify(&self, content: &TicketContent) -> TicketClassification {
        let text = content.combined_text().to_lowercase();
        let matchers = self.matchers(content.language);

        let mut category = Category::General;
        let mut tags = Vec::new();

        if matchers.technical.is_match(&text) {
            category = Category::Bug;
            tags.push("technical-issue".to_string());
        }

        // The billing scan runs after technical and reassigns the category
        // outright; last match wins.
        if matchers.billing.is_match(&text) {
            category = Category::Billing;
            tags.push("payment-related".to_string());
        }

        let (priority, urgency_score) = if matchers.urgent.is_match(&text) {
            tags.push("urgent".to_string());
            (Priority::Urgent, URGENT_URGENCY_SCORE)
        } else {
            (Priority::Medium, DEFAULT_URGENCY_SCORE)
        };

        // Sentiment words are English-only, whatever the declared language.
        let sentiment = if self.negative.is_match(&text) {
            Sentiment::Negative
        } else if self.positive.is_match(&text) {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        };

        if tags.is_empty() {
            tags.push(TicketClassification::PLACEHOLDER_TAG.to_string());
        }

        TicketClassification {
            category,
            priority,
            sentiment,
            urgency_score,
            suggested_tags: tags,
            confidence: KEYWORD_CONFIDENCE,
            reasoning: KEYWORD_REASONING.to_string(),
            language_detected: content.language.code().to_string(),
        }
    }

    fn matchers(&self, language: Language) -> &LanguageMatchers {
        self.by_language.get(&language).unwrap_or(&self.english)
    }
}

fn build_matcher(patterns: &[&str]) -> Result<AhoCorasick> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(patterns)
        .map_err(|e| Error::classifier(format!("failed to build keyword matcher: {e}")))
}
