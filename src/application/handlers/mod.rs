//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod chat;

pub use catalog::{FaqInput, ManageFaqsHandler, ManageServicesHandler, ServiceInput};
pub use chat::{
    AskQuestionError, AskQuestionHandler, AskQuestionQuery, AskQuestionResult,
    ConversationLogger, ConversationLoggerWorker, GenerationClient, GenerationSettings,
    GetChatHistoryHandler, GetChatHistoryQuery, SendChatMessageCommand, SendChatMessageError,
    SendChatMessageHandler, SendChatMessageResult,
};
