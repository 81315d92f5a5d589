//! Conversation store: durable CRUD over sessions and messages.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;

/// A persisted conversation thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub title: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One turn within a session. Append-only; never mutated after creation and
/// deleted only via session cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub session_id: Uuid,
    pub role: String,
    pub content: String,
    pub file_id: Option<String>,
    pub run_id: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Role written for a new message. Reads come back as plain strings; writes
/// go through this enum so only the two known values ever get persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Storage seam for sessions and messages.
///
/// Production uses [`PgStore`]; tests use [`MemoryStore`].
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Create a session with a fresh identity and current timestamps.
    async fn create_session(&self, title: &str, user_id: &str) -> Result<Session>;

    /// List sessions, optionally filtered by user.
    async fn list_sessions(&self, user_id: Option<&str>) -> Result<Vec<Session>>;

    /// Fetch one session by id.
    async fn get_session(&self, id: Uuid) -> Result<Option<Session>>;

    /// Append an ordered message row. Fails with a session-not-found error
    /// when the session does not exist.
    async fn append_message(
        &self,
        session_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> Result<Message>;

    /// All messages of a session, ordered by creation time.
    async fn transcript(&self, session_id: Uuid) -> Result<Vec<Message>>;
}
