//! Chat command and query handlers.
//!
//! - `SendChatMessageHandler` - the grounded chat pipeline
//! - `AskQuestionHandler` - stateless quick answers
//! - `GetChatHistoryHandler` - the shared transcript
//! - `ConversationLogger` - background persistence of exchanges

mod ask_question;
mod context;
mod generation;
mod get_history;
mod send_message;
mod turn_logger;

pub use ask_question::{AskQuestionError, AskQuestionHandler, AskQuestionQuery, AskQuestionResult};
pub use context::load_context;
pub use generation::{GenerationClient, GenerationSettings};
pub use get_history::{
    GetChatHistoryHandler, GetChatHistoryQuery, DEFAULT_HISTORY_PAGE, MAX_HISTORY_PAGE,
};
pub use send_message::{
    SendChatMessageCommand, SendChatMessageError, SendChatMessageHandler, SendChatMessageResult,
};
pub use turn_logger::{ConversationLogger, ConversationLoggerWorker};
