//! SendChatMessage command handler.
//!
//! The grounded chat pipeline:
//! validate → read catalog and history concurrently → compose prompt →
//! generate (bounded, with fallback) → sanitize → queue the exchange for
//! logging → answer.
//!
//! Only a missing message is reported as an error. Store and generation
//! failures degrade to an empty context, empty history or the fallback
//! answer.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::{ConversationTurn, Exchange, PromptComposer};
use crate::ports::{CatalogReader, ConversationLog};

use super::context::load_context;
use super::generation::GenerationClient;
use super::turn_logger::ConversationLogger;

/// Command carrying one citizen message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub message: String,
}

impl SendChatMessageCommand {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Answer returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendChatMessageResult {
    pub response: String,
    /// True when the fallback answer was substituted.
    pub is_error: bool,
}

/// Errors that reject a chat message before any work is done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendChatMessageError {
    #[error("Message is required")]
    MessageRequired,
}

/// Handler for the chat pipeline.
pub struct SendChatMessageHandler {
    catalog: Arc<dyn CatalogReader>,
    history: Arc<dyn ConversationLog>,
    composer: PromptComposer,
    generator: GenerationClient,
    logger: ConversationLogger,
    history_limit: usize,
}

impl SendChatMessageHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        history: Arc<dyn ConversationLog>,
        composer: PromptComposer,
        generator: GenerationClient,
        logger: ConversationLogger,
        history_limit: usize,
    ) -> Self {
        Self {
            catalog,
            history,
            composer,
            generator,
            logger,
            history_limit,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, SendChatMessageError> {
        if cmd.message.trim().is_empty() {
            return Err(SendChatMessageError::MessageRequired);
        }
        let message = cmd.message.as_str();

        let (context, recent) =
            futures::join!(load_context(self.catalog.as_ref()), self.load_history());

        let prompt = self.composer.compose(context.as_ref(), &recent, message);
        if prompt.was_truncated() {
            tracing::debug!(
                omitted_services = prompt.omitted_services,
                omitted_faqs = prompt.omitted_faqs,
                omitted_turns = prompt.omitted_turns,
                "prompt trimmed to context budget"
            );
        }

        let reply = self
            .generator
            .sanitize(self.generator.generate(prompt.text).await);

        self.logger
            .record(Exchange::new(message, reply.text.clone(), reply.is_error()));

        tracing::info!(
            is_error = reply.is_error(),
            history_turns = recent.len(),
            grounded = context.is_some(),
            "chat message answered"
        );

        Ok(SendChatMessageResult {
            is_error: reply.is_error(),
            response: reply.text,
        })
    }

    async fn load_history(&self) -> Vec<ConversationTurn> {
        match self.history.recent(self.history_limit).await {
            Ok(turns) => turns,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    code = %err.code(),
                    "conversation history unavailable, continuing without it"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::memory::{InMemoryCatalog, InMemoryConversationLog};
    use crate::application::handlers::chat::{ConversationLoggerWorker, GenerationSettings};
    use crate::domain::catalog::{FaqDraft, FaqRecord, ServiceDraft, ServiceRecord};
    use crate::domain::conversation::{ContextBudget, Sender, FALLBACK_RESPONSE};

    struct Fixture {
        handler: SendChatMessageHandler,
        provider: MockAIProvider,
        catalog: Arc<InMemoryCatalog>,
        log: Arc<InMemoryConversationLog>,
        worker: ConversationLoggerWorker,
    }

    fn fixture(provider: MockAIProvider) -> Fixture {
        let service = ServiceRecord::from_draft(
            ServiceDraft::new("Barangay Clearance", "Valid ID\nCedula", 50.0, "1 day").unwrap(),
        );
        let faq = FaqRecord::from_draft(
            FaqDraft::new("What are the office hours?", "8AM to 5PM, Monday to Friday.").unwrap(),
        );
        let catalog = Arc::new(InMemoryCatalog::with_records(vec![service], vec![faq]));
        let log = Arc::new(InMemoryConversationLog::new());
        let (logger, worker) = ConversationLogger::spawn(log.clone(), 16);

        let handler = SendChatMessageHandler::new(
            catalog.clone(),
            log.clone(),
            PromptComposer::new(ContextBudget::default()),
            GenerationClient::new(Arc::new(provider.clone()), GenerationSettings::default()),
            logger,
            5,
        );

        Fixture {
            handler,
            provider,
            catalog,
            log,
            worker,
        }
    }

    #[tokio::test]
    async fn answers_and_logs_two_turns() {
        let f = fixture(MockAIProvider::new().with_response("It costs **50 pesos** po."));

        let result = f
            .handler
            .handle(SendChatMessageCommand::new("How much is a clearance?"))
            .await
            .unwrap();
        f.worker.shutdown().await;

        assert_eq!(result.response, "It costs 50 pesos po.");
        assert!(!result.is_error);

        let turns = f.log.turns().await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, Sender::User);
        assert_eq!(turns[0].content, "How much is a clearance?");
        assert_eq!(turns[1].sender, Sender::Bot);
        assert_eq!(turns[1].content, "It costs 50 pesos po.");
        assert!(!turns[1].is_error);
    }

    #[tokio::test]
    async fn message_is_composed_and_logged_as_typed() {
        let f = fixture(MockAIProvider::new().with_response("Opo."));
        let typed = "  Magkano po ang clearance?\n";

        f.handler
            .handle(SendChatMessageCommand::new(typed))
            .await
            .unwrap();
        f.worker.shutdown().await;

        let prompt = f.provider.last_prompt().unwrap();
        assert!(prompt.ends_with(&format!("User: {}", typed)));
        let turns = f.log.turns().await;
        assert_eq!(turns[0].content, typed);
    }

    #[tokio::test]
    async fn generation_failure_returns_fallback_and_flags_turn() {
        let f = fixture(MockAIProvider::new().with_error(MockError::Network {
            message: "connection refused".into(),
        }));

        let result = f
            .handler
            .handle(SendChatMessageCommand::new("Hello"))
            .await
            .unwrap();
        f.worker.shutdown().await;

        assert_eq!(result.response, FALLBACK_RESPONSE);
        assert!(result.is_error);

        let turns = f.log.turns().await;
        assert_eq!(turns.len(), 2);
        assert!(!turns[0].is_error);
        assert!(turns[1].is_error);
        assert_eq!(turns[1].content, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_calls() {
        let f = fixture(MockAIProvider::new());

        let err = f
            .handler
            .handle(SendChatMessageCommand::new("   "))
            .await
            .unwrap_err();
        f.worker.shutdown().await;

        assert_eq!(err, SendChatMessageError::MessageRequired);
        assert_eq!(f.provider.call_count(), 0);
        assert!(f.log.is_empty().await);
    }

    #[tokio::test]
    async fn prompt_is_grounded_in_catalog_and_history() {
        let f = fixture(MockAIProvider::new().with_response("first").with_response("second"));

        f.handler
            .handle(SendChatMessageCommand::new("Hi"))
            .await
            .unwrap();
        // Let the worker persist the first exchange before the next read.
        for _ in 0..50 {
            if f.log.len().await == 2 {
                break;
            }
            tokio::task::yield_now().await;
        }
        f.handler
            .handle(SendChatMessageCommand::new("What are the office hours?"))
            .await
            .unwrap();
        f.worker.shutdown().await;

        let prompt = f.provider.last_prompt().unwrap();
        assert!(prompt.contains("Service: Barangay Clearance"));
        assert!(prompt.contains("Q: What are the office hours?"));
        assert!(prompt.contains("Previous conversation:"));
        assert!(prompt.contains("User: Hi\nAssistant: first"));
        assert!(prompt.ends_with("User: What are the office hours?"));
    }

    #[tokio::test]
    async fn catalog_failure_still_answers() {
        let f = fixture(MockAIProvider::new().with_response("Please visit the office."));
        f.catalog.set_fail_reads(true);

        let result = f
            .handler
            .handle(SendChatMessageCommand::new("Do you issue permits?"))
            .await
            .unwrap();
        f.worker.shutdown().await;

        assert!(!result.is_error);
        let prompt = f.provider.last_prompt().unwrap();
        assert!(!prompt.contains("Service: Barangay Clearance"));
        assert_eq!(f.log.len().await, 2);
    }

    #[tokio::test]
    async fn history_failure_still_answers() {
        let f = fixture(MockAIProvider::new().with_response("Opo."));
        f.log.set_fail_reads(true);

        let result = f
            .handler
            .handle(SendChatMessageCommand::new("Open today?"))
            .await
            .unwrap();
        f.worker.shutdown().await;

        assert_eq!(result.response, "Opo.");
        assert!(!f.provider.last_prompt().unwrap().contains("Previous conversation:"));
    }

    #[tokio::test]
    async fn persistence_failure_does_not_affect_response() {
        let f = fixture(MockAIProvider::new().with_response("Opo."));
        f.log.set_fail_writes(true);

        let result = f
            .handler
            .handle(SendChatMessageCommand::new("Open today?"))
            .await
            .unwrap();
        f.worker.shutdown().await;

        assert_eq!(result.response, "Opo.");
        assert!(f.log.is_empty().await);
    }
}
