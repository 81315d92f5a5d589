//! Environment-driven configuration, loaded once at process start.

use crate::error::{ChatError, Result};

/// Process configuration.
///
/// Every external collaborator (database, OpenAI, Eduplus, the bot feed) is
/// configured here; a missing required variable aborts startup rather than
/// failing later mid-request.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Postgres connection string.
    pub database_url: String,
    /// OpenAI API key for the reasoning engine and document search.
    pub openai_api_key: String,
    /// Override for the OpenAI base URL (tests point this at a mock server).
    pub openai_base_url: Option<String>,
    /// Base URL of the Eduplus LMS analytics API.
    pub eduplus_url: String,
    /// Raw authorization token for Eduplus requests.
    pub eduplus_token: String,
    /// Base URL of the sibling bot service exposing the anonymous feed.
    pub bot_feed_url: String,
    /// Vector store index holding the university knowledge base.
    pub vector_store_id: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Settings {
    /// Load from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            eduplus_url: required("EDUPLUS_URL")?,
            eduplus_token: required("EDUPLUS_TOKEN")?,
            bot_feed_url: std::env::var("BOT_FEED_URL")
                .unwrap_or_else(|_| "http://bot:3000".to_string()),
            vector_store_id: required("VECTOR_STORE_ID")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}

fn required(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| ChatError::Configuration(format!("missing required environment variable {name}")))
}
