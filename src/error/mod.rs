//! Error types for educhat.

use thiserror::Error;
use uuid::Uuid;

/// Primary error type for all educhat operations.
///
/// Domain "not found" conditions (student, transcript, session, empty feed)
/// are distinct variants rather than generic API errors so callers can tell
/// "the upstream had nothing" apart from "the request failed".
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Student {0} not found")]
    StudentNotFound(String),

    #[error("Transcript not found for student {0}")]
    TranscriptNotFound(String),

    #[error("No data returned by the {0}")]
    EmptyFeed(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Agent error: {0}")]
    Agent(String),
}

impl ChatError {
    /// Create an API error from an HTTP status and body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is a domain-level "nothing there" condition,
    /// as opposed to a transport or validation failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SessionNotFound(_)
                | Self::StudentNotFound(_)
                | Self::TranscriptNotFound(_)
                | Self::EmptyFeed(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ChatError>;
