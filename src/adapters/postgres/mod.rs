//! PostgreSQL adapters - Database implementations for the store ports.
//!
//! - `PostgresCatalog` - Services and FAQs (reader and admin repository)
//! - `PostgresConversationLog` - The shared chat history

mod catalog;
mod conversation_log;

pub use catalog::PostgresCatalog;
pub use conversation_log::PostgresConversationLog;
