//! In-memory adapters - Store implementations without a database.
//!
//! Used by tests and by local runs that skip PostgreSQL.

mod catalog;
mod conversation_log;

pub use catalog::InMemoryCatalog;
pub use conversation_log::InMemoryConversationLog;
