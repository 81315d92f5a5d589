//! Request payloads for the HTTP surface.

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SessionCreate {
    #[serde(default)]
    pub title: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Uuid,
    pub message: String,
    /// Accepted for client compatibility; image input is not forwarded.
    pub img_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionsQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AskQuery {
    pub question: String,
}
