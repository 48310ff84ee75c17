//! In-memory conversation log for tests and local runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::conversation::{ConversationTurn, Exchange};
use crate::domain::foundation::DomainError;
use crate::ports::ConversationLog;

/// Append-only turn list kept in memory.
#[derive(Default)]
pub struct InMemoryConversationLog {
    turns: RwLock<Vec<ConversationTurn>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log that already holds the given turns.
    pub fn with_turns(turns: Vec<ConversationTurn>) -> Self {
        Self {
            turns: RwLock::new(turns),
            ..Self::default()
        }
    }

    /// Toggles simulated read failures.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Toggles simulated write failures.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Every stored turn in write order.
    pub async fn turns(&self) -> Vec<ConversationTurn> {
        self.turns.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.turns.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.turns.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationLog for InMemoryConversationLog {
    async fn recent(&self, limit: usize) -> Result<Vec<ConversationTurn>, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::data_unavailable("conversation store unreachable"));
        }

        let mut turns = self.turns.read().await.clone();
        // Stable sort keeps write order for equal timestamps.
        turns.sort_by_key(|t| t.created_at);
        let skip = turns.len().saturating_sub(limit);
        Ok(turns.split_off(skip))
    }

    async fn append_exchange(&self, exchange: &Exchange) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("conversation store rejected write"));
        }

        let mut turns = self.turns.write().await;
        turns.extend(exchange.turns().into_iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Sender;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn append_stores_user_then_bot() {
        let log = InMemoryConversationLog::new();

        log.append_exchange(&Exchange::new("Hi", "Hello po!", false))
            .await
            .unwrap();

        let turns = log.turns().await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, Sender::User);
        assert_eq!(turns[1].sender, Sender::Bot);
        assert!(!turns[1].is_error);
    }

    #[tokio::test]
    async fn recent_returns_latest_oldest_first() {
        let log = InMemoryConversationLog::new();
        for i in 0..4 {
            log.append_exchange(&Exchange::new(format!("q{}", i), format!("a{}", i), false))
                .await
                .unwrap();
        }

        let recent = log.recent(5).await.unwrap();

        let contents: Vec<_> = recent.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["a1", "q2", "a2", "q3", "a3"]);
    }

    #[tokio::test]
    async fn recent_with_zero_limit_is_empty() {
        let log = InMemoryConversationLog::new();
        log.append_exchange(&Exchange::new("q", "a", false))
            .await
            .unwrap();

        assert!(log.recent(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_writes_store_nothing() {
        let log = InMemoryConversationLog::new();
        log.set_fail_writes(true);

        let err = log
            .append_exchange(&Exchange::new("q", "a", false))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::PersistenceFailure);
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn failing_reads_report_data_unavailable() {
        let log = InMemoryConversationLog::new();
        log.set_fail_reads(true);

        let err = log.recent(5).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DataUnavailable);
    }
}
