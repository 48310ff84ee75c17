//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Datastore Ports
//!
//! - `CatalogReader` - Services and FAQs used to ground answers
//! - `CatalogRepository` - Admin writes to services and FAQs
//! - `ConversationLog` - Append-only chat history
//!
//! ## Generation Port
//!
//! - `AIProvider` - Hosted text-generation service

mod ai_provider;
mod catalog_reader;
mod catalog_repository;
mod conversation_log;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
};
pub use catalog_reader::CatalogReader;
pub use catalog_repository::CatalogRepository;
pub use conversation_log::ConversationLog;
