//! Ticketflow AI
//!
//! AI classification and response drafting for support tickets.
//!
//! Three consumers share one OpenAI-compatible completion API:
//! - [`TicketClassifier`] - structured category/priority/sentiment
//!   classification with a deterministic multilingual keyword fallback
//! - [`ResponseSuggester`] - agent-facing draft replies with per-language
//!   template fallback
//! - [`SupportAssistant`] - conversational product Q&A with canned fallback
//!
//! All three are total operations: every failure mode of the external API
//! (missing credential, transport error, malformed output) degrades to a
//! deterministic local result, and no error ever reaches the caller.

pub mod assistant;
pub mod classifier;
pub mod completion;
pub mod config;
pub mod keyword;
pub mod lexicon;
pub mod suggest;
pub mod validate;

pub use assistant::SupportAssistant;
pub use classifier::{ClassificationOutcome, ClassificationSource, TicketClassifier};
pub use completion::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use config::AiConfig;
pub use keyword::KeywordClassifier;
pub use suggest::{ResponseSuggester, SuggestionOutcome};
pub use validate::RawClassification;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::assistant::SupportAssistant;
    pub use crate::classifier::{ClassificationOutcome, ClassificationSource, TicketClassifier};
    pub use crate::completion::{CompletionClient, CompletionRequest, HttpCompletionClient};
    pub use crate::config::AiConfig;
    pub use crate::suggest::{ResponseSuggester, SuggestionOutcome};
}
