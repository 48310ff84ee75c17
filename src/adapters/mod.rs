//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generation providers (Gemini, mock)
//! - `postgres` - PostgreSQL-backed catalog and conversation log
//! - `memory` - In-memory stores for tests and database-less runs
//! - `http` - axum REST endpoints

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use memory::{InMemoryCatalog, InMemoryConversationLog};
pub use postgres::{PostgresCatalog, PostgresConversationLog};
