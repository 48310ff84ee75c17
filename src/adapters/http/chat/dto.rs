//! Data transfer objects for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationTurn;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/chatbot/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/gemini-chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// Query string of `GET /api/chatbot/messages`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// `{"data": {"response": "..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub data: ChatReply,
}

impl SendMessageResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            data: ChatReply {
                response: response.into(),
            },
        }
    }
}

/// `{"answer": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskQuestionResponse {
    pub answer: String,
}

/// `{"data": [turn, ...]}`, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub data: Vec<ConversationTurn>,
}
