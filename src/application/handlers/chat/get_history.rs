//! GetChatHistory query handler - the shared transcript.

use std::sync::Arc;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationLog;

/// Default number of turns returned when no limit is given.
pub const DEFAULT_HISTORY_PAGE: usize = 50;
/// Hard cap on turns returned by one query.
pub const MAX_HISTORY_PAGE: usize = 500;

#[derive(Debug, Clone, Default)]
pub struct GetChatHistoryQuery {
    pub limit: Option<usize>,
}

/// Returns the most recent turns, oldest first.
pub struct GetChatHistoryHandler {
    log: Arc<dyn ConversationLog>,
}

impl GetChatHistoryHandler {
    pub fn new(log: Arc<dyn ConversationLog>) -> Self {
        Self { log }
    }

    pub async fn handle(
        &self,
        query: GetChatHistoryQuery,
    ) -> Result<Vec<ConversationTurn>, DomainError> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_HISTORY_PAGE)
            .min(MAX_HISTORY_PAGE);
        self.log.recent(limit).await
    }
}
