//! HTTP surface tests against a served router.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use educhat::agent::{AgentMessage, Assistant, ReasoningEngine};
use educhat::api::{router, AppState};
use educhat::chat::ChatService;
use educhat::store::{ConversationStore, MemoryStore};
use educhat::tools::Tool;
use educhat::{ChatError, Result};

/// Engine stub that either answers with a fixed reply or fails outright.
struct ScriptedEngine {
    reply: Option<String>,
}

#[async_trait]
impl ReasoningEngine for ScriptedEngine {
    async fn run(
        &self,
        _instructions: &str,
        _transcript: &[AgentMessage],
        _tools: &[Arc<dyn Tool>],
    ) -> Result<String> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(ChatError::Agent("model backend unavailable".to_string())),
        }
    }
}

/// Serve the router on an ephemeral port and return its base URL plus the
/// shared store for seeding.
async fn spawn_app(reply: Option<&str>) -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let engine = Arc::new(ScriptedEngine {
        reply: reply.map(str::to_string),
    });
    let assistant = Arc::new(Assistant::new(engine, Vec::new()));
    let service = Arc::new(ChatService::new(store.clone(), assistant));
    let app = router(AppState {
        service,
        store: store.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), store)
}

#[tokio::test]
async fn health_reports_healthy() {
    let (base, _store) = spawn_app(Some("unused")).await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn chat_against_unknown_session_is_404_with_detail() {
    let (base, store) = spawn_app(Some("unused")).await;
    let missing = Uuid::new_v4();

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/chat"))
        .json(&json!({ "session_id": missing, "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains(&missing.to_string()));
    assert_eq!(store.message_count(), 0);
}

#[tokio::test]
async fn chat_turn_returns_completed_four_field_body() {
    let (base, store) = spawn_app(Some("Attendance averages 87 percent.")).await;
    let session = store.create_session("attendance", "staff-1").await.unwrap();

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/chat"))
        .json(&json!({
            "session_id": session.id,
            "message": "What is the average attendance?",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["session_id"], json!(session.id));
    assert_eq!(body["message"], json!("What is the average attendance?"));
    assert_eq!(body["assistant_response"], json!("Attendance averages 87 percent."));
    assert_eq!(body["status"], json!("completed"));
}

#[tokio::test]
async fn engine_failure_is_500_with_detail_and_message() {
    let (base, store) = spawn_app(None).await;
    let session = store.create_session("broken", "staff-1").await.unwrap();

    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/chat"))
        .json(&json!({ "session_id": session.id, "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], json!("Internal Server Error"));
    assert!(body["message"].as_str().unwrap().contains("model backend unavailable"));
}

#[tokio::test]
async fn sessions_round_trip_with_messages() {
    let (base, _store) = spawn_app(Some("Noted.")).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/v1/sessions"))
        .json(&json!({ "title": "planning", "user_id": "staff-1" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["user_id"], json!("staff-1"));
    assert_eq!(created["messages"], json!([]));

    client
        .post(format!("{base}/api/v1/chat"))
        .json(&json!({ "session_id": created["id"], "message": "plan the week" }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let listed: Value = client
        .get(format!("{base}/api/v1/sessions"))
        .query(&[("user_id", "staff-1")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let sessions = listed.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    let messages = sessions[0]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], json!("user"));
    assert_eq!(messages[1]["role"], json!("assistant"));
}

#[tokio::test]
async fn ask_answers_without_a_session() {
    let (base, store) = spawn_app(Some("The library opens at eight.")).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/api/v1/ask"))
        .query(&[("question", "When does the library open?")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "The library opens at eight." }));
    assert_eq!(store.message_count(), 0);
}
