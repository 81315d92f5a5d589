//! In-memory conversation store for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ChatError, Result};

use super::{ConversationStore, Message, MessageRole, Session};

/// Conversation store backed by a process-local map. Preserves insertion
/// order per session, matching the created-at ordering of the durable store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    sessions: Vec<Session>,
    messages: HashMap<Uuid, Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of persisted messages across all sessions.
    pub fn message_count(&self) -> usize {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.messages.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn create_session(&self, title: &str, user_id: &str) -> Result<Session> {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            title: title.to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.messages.insert(session.id, Vec::new());
        inner.sessions.push(session.clone());
        Ok(session)
    }

    async fn list_sessions(&self, user_id: Option<&str>) -> Result<Vec<Session>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .sessions
            .iter()
            .filter(|s| user_id.map_or(true, |u| s.user_id == u))
            .cloned()
            .collect())
    }

    async fn get_session(&self, id: Uuid) -> Result<Option<Session>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn append_message(
        &self,
        session_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> Result<Message> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let now = Utc::now();
        if let Some(session) = inner.sessions.iter_mut().find(|s| s.id == session_id) {
            session.updated_at = now;
        } else {
            return Err(ChatError::SessionNotFound(session_id));
        }
        let message = Message {
            id: Uuid::new_v4(),
            session_id,
            role: role.to_string(),
            content: content.to_string(),
            file_id: None,
            run_id: None,
            metadata: None,
            created_at: now,
        };
        inner
            .messages
            .entry(session_id)
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn transcript(&self, session_id: Uuid) -> Result<Vec<Message>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.messages.get(&session_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_to_missing_session_fails() {
        let store = MemoryStore::new();
        let err = store
            .append_message(Uuid::new_v4(), MessageRole::User, "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::SessionNotFound(_)));
        assert_eq!(store.message_count(), 0);
    }

    #[tokio::test]
    async fn transcript_preserves_insertion_order() {
        let store = MemoryStore::new();
        let session = store.create_session("t", "u1").await.unwrap();
        store
            .append_message(session.id, MessageRole::User, "first")
            .await
            .unwrap();
        store
            .append_message(session.id, MessageRole::Assistant, "second")
            .await
            .unwrap();

        let transcript = store.transcript(session.id).await.unwrap();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].content, "first");
        assert_eq!(transcript[1].role, "assistant");
    }
}
