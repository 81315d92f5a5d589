//! Response payloads for the HTTP surface.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::store::{Message, Session};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub title: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<MessageResponse>,
}

impl SessionResponse {
    pub fn from_session(session: Session, messages: Vec<Message>) -> Self {
        Self {
            id: session.id,
            title: session.title,
            user_id: session.user_id,
            created_at: session.created_at,
            updated_at: session.updated_at,
            messages: messages.into_iter().map(MessageResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            role: message.role,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

/// Turn status. Only `completed` is currently produced; the other values
/// exist for clients that poll asynchronous backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChatStatus {
    Completed,
    Failed,
    Cancelled,
    InProgress,
    Queued,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub message: String,
    pub assistant_response: String,
    pub status: ChatStatus,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub message: String,
}
