//! ConversationLog port - the shared, append-only chat history.
//!
//! # Ordering
//!
//! Turns are ordered by `created_at`. Readers always receive them oldest
//! first, even when the query selects the most recent ones.

use async_trait::async_trait;

use crate::domain::conversation::{ConversationTurn, Exchange};
use crate::domain::foundation::DomainError;

/// Persistence for conversation turns.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Returns up to `limit` most recent turns, oldest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ConversationTurn>, DomainError>;

    /// Appends both turns of an exchange in one logical write.
    ///
    /// Either both turns are stored (user then bot) or neither is.
    async fn append_exchange(&self, exchange: &Exchange) -> Result<(), DomainError>;
}
