//! HTTP surface: three JSON endpoints plus a one-shot ask and a health probe.

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::chat::ChatService;
use crate::store::ConversationStore;

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ChatService>,
    pub store: Arc<dyn ConversationStore>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/v1/sessions",
            get(handler::list_sessions).post(handler::create_session),
        )
        .route("/api/v1/chat", post(handler::chat))
        .route("/api/v1/ask", get(handler::ask))
        .route("/health", get(handler::health))
        .layer(cors)
        .with_state(state)
}
