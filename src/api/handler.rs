//! Route handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::api::error::ApiError;
use crate::api::request::{AskQuery, ChatRequest, SessionCreate, SessionsQuery};
use crate::api::response::{AskResponse, ChatResponse, ChatStatus, SessionResponse};
use crate::api::AppState;

pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<SessionCreate>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.store.create_session(&body.title, &body.user_id).await?;
    info!(session_id = %session.id, user_id = %session.user_id, "session created");
    Ok(Json(SessionResponse::from_session(session, Vec::new())))
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<SessionsQuery>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let sessions = state.store.list_sessions(query.user_id.as_deref()).await?;
    let mut out = Vec::with_capacity(sessions.len());
    for session in sessions {
        let messages = state.store.transcript(session.id).await?;
        out.push(SessionResponse::from_session(session, messages));
    }
    Ok(Json(out))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let reply = state.service.chat_turn(body.session_id, &body.message).await?;
    Ok(Json(ChatResponse {
        session_id: body.session_id,
        message: body.message,
        assistant_response: reply,
        status: ChatStatus::Completed,
    }))
}

pub async fn ask(
    State(state): State<AppState>,
    Query(query): Query<AskQuery>,
) -> Result<Json<AskResponse>, ApiError> {
    let message = state.service.ask(&query.question).await?;
    Ok(Json(AskResponse { message }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
