//! Chat HTTP adapter.
//!
//! - `POST /api/chatbot/message` - grounded chat with shared history
//! - `POST /api/gemini-chat` - stateless quick answer
//! - `GET /api/chatbot/messages` - transcript

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AskQuestionRequest, AskQuestionResponse, ChatReply, HistoryParams, HistoryResponse,
    SendMessageRequest, SendMessageResponse,
};
pub use handlers::ChatAppState;
pub use routes::chat_routes;
