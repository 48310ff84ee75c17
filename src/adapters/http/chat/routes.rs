//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{ask_question, list_messages, send_message, ChatAppState};

/// Creates the chat router with all endpoints.
pub fn chat_routes(state: ChatAppState) -> Router {
    Router::new()
        .route("/api/chatbot/message", post(send_message))
        .route("/api/chatbot/messages", get(list_messages))
        .route("/api/gemini-chat", post(ask_question))
        .with_state(state)
}
