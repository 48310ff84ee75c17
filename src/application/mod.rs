//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AskQuestionHandler, ConversationLogger, ConversationLoggerWorker, GenerationClient,
    GenerationSettings, GetChatHistoryHandler, ManageFaqsHandler, ManageServicesHandler,
    SendChatMessageHandler,
};
