//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::chat::{
    AskQuestionError, AskQuestionHandler, AskQuestionQuery, GetChatHistoryHandler,
    GetChatHistoryQuery, SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler,
};

use super::dto::{
    AskQuestionRequest, AskQuestionResponse, HistoryParams, HistoryResponse, SendMessageRequest,
    SendMessageResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatAppState {
    send_message: Arc<SendChatMessageHandler>,
    ask_question: Arc<AskQuestionHandler>,
    history: Arc<GetChatHistoryHandler>,
}

impl ChatAppState {
    pub fn new(
        send_message: Arc<SendChatMessageHandler>,
        ask_question: Arc<AskQuestionHandler>,
        history: Arc<GetChatHistoryHandler>,
    ) -> Self {
        Self {
            send_message,
            ask_question,
            history,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chatbot/message - Answer a citizen message
///
/// Generation failures still answer 200 with the fallback text.
pub async fn send_message(
    State(state): State<ChatAppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let message = match payload {
        Ok(Json(SendMessageRequest {
            message: Some(message),
        })) => message,
        Ok(_) => return Err(SendChatMessageError::MessageRequired.into()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable chat message body");
            return Err(SendChatMessageError::MessageRequired.into());
        }
    };

    let result = state
        .send_message
        .handle(SendChatMessageCommand::new(message))
        .await?;

    Ok(Json(SendMessageResponse::new(result.response)))
}

/// POST /api/gemini-chat - Stateless quick answer
pub async fn ask_question(
    State(state): State<ChatAppState>,
    payload: Result<Json<AskQuestionRequest>, JsonRejection>,
) -> Result<Json<AskQuestionResponse>, ApiError> {
    let question = match payload {
        Ok(Json(AskQuestionRequest {
            question: Some(question),
        })) => question,
        Ok(_) | Err(_) => return Err(AskQuestionError::MissingQuestion.into()),
    };

    let result = state
        .ask_question
        .handle(AskQuestionQuery::new(question))
        .await?;

    Ok(Json(AskQuestionResponse {
        answer: result.answer,
    }))
}

/// GET /api/chatbot/messages - Recent turns, oldest first
pub async fn list_messages(
    State(state): State<ChatAppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let Query(params) =
        params.map_err(|_| ApiError::bad_request("limit must be a non-negative integer"))?;

    let turns = state
        .history
        .handle(GetChatHistoryQuery {
            limit: params.limit,
        })
        .await?;

    Ok(Json(HistoryResponse { data: turns }))
}

impl From<SendChatMessageError> for ApiError {
    fn from(err: SendChatMessageError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<AskQuestionError> for ApiError {
    fn from(err: AskQuestionError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
