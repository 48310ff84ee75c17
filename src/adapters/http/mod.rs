//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; `app_router`
//! merges them behind the shared middleware stack.

pub mod admin;
pub mod chat;
pub mod error;
pub mod health;
mod router;

// Re-export key types for convenience
pub use admin::{admin_routes, AdminAppState};
pub use chat::{chat_routes, ChatAppState};
pub use error::{ApiError, ErrorResponse};
pub use router::{app_router, RouterOptions};
