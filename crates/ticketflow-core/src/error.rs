//! Error types for Ticketflow

/// Result type alias using Ticketflow's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Ticketflow operations
///
/// These errors are internal signals only. The public classification and
/// suggestion operations convert every failure into a fallback result, so
/// none of these variants ever reach an end user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Completion API errors (transport failures, non-2xx statuses,
    /// missing or malformed response bodies)
    #[error("completion api error: {0}")]
    Completion(String),

    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new completion API error
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
