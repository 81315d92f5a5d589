//! One-turn chat orchestration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::agent::{AgentMessage, Assistant};
use crate::error::{ChatError, Result};
use crate::store::{ConversationStore, Message, MessageRole};

/// Orchestrates one conversational turn against the store and the assistant.
///
/// Ordering within a turn: the user message is durably appended before the
/// assistant is invoked, and the assistant message is appended only after it
/// returns. No retries; an engine failure fails the whole turn.
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    assistant: Arc<Assistant>,
}

impl ChatService {
    pub fn new(store: Arc<dyn ConversationStore>, assistant: Arc<Assistant>) -> Self {
        Self { store, assistant }
    }

    /// Run one persisted turn in an existing session.
    ///
    /// Resolves the session first; an unknown id fails before anything is
    /// written.
    pub async fn chat_turn(&self, session_id: Uuid, message: &str) -> Result<String> {
        let session = self
            .store
            .get_session(session_id)
            .await?
            .ok_or(ChatError::SessionNotFound(session_id))?;

        let history = self.store.transcript(session.id).await?;
        let transcript: Vec<AgentMessage> = history.iter().map(to_agent_message).collect();

        self.store
            .append_message(session.id, MessageRole::User, message)
            .await?;

        let reply = self.assistant.respond(&transcript, message).await?;

        self.store
            .append_message(session.id, MessageRole::Assistant, &reply)
            .await?;

        info!(session_id = %session.id, "chat turn completed");
        Ok(reply)
    }

    /// Stateless one-shot question; nothing is persisted.
    pub async fn ask(&self, question: &str) -> Result<String> {
        self.assistant.respond(&[], question).await
    }
}

fn to_agent_message(message: &Message) -> AgentMessage {
    match message.role.as_str() {
        "assistant" => AgentMessage::assistant(&message.content),
        _ => AgentMessage::user(&message.content),
    }
}
