//! Ticketflow Core
//!
//! Core types shared across Ticketflow components.
//!
//! This crate provides:
//! - Ticket content and classification types
//! - The closed enumeration of supported ticket locales
//! - Error types and result handling

pub mod error;
pub mod language;
pub mod types;

pub use error::{Error, Result};
pub use language::Language;
pub use types::{
    Category, ChatMessage, Priority, Sentiment, TicketClassification, TicketContent,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::language::Language;
    pub use crate::types::{
        Category, ChatMessage, Priority, Sentiment, TicketClassification, TicketContent,
    };
}
