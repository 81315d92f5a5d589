//! Agent definition: one assistant identity bound to the tool set, plus the
//! pluggable reasoning engine that drives tool selection.

pub mod assistant;
pub mod engine;
pub mod search;

pub use assistant::Assistant;
pub use engine::{OpenAiEngine, ReasoningEngine};
pub use search::DocumentSearchTool;

use serde::{Deserialize, Serialize};

/// Speaker role within an agent transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One turn of an agent transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub role: Role,
    pub content: String,
}

impl AgentMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
