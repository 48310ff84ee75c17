//! AskQuestion handler - stateless quick answers.
//!
//! Same grounding data as the chat pipeline, but no history is read and
//! nothing is logged.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::conversation::PromptComposer;
use crate::ports::CatalogReader;

use super::context::load_context;
use super::generation::GenerationClient;

/// Query carrying one standalone question.
#[derive(Debug, Clone)]
pub struct AskQuestionQuery {
    pub question: String,
}

impl AskQuestionQuery {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskQuestionResult {
    pub answer: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskQuestionError {
    #[error("Missing question")]
    MissingQuestion,
}

/// Handler for one-off questions.
pub struct AskQuestionHandler {
    catalog: Arc<dyn CatalogReader>,
    composer: PromptComposer,
    generator: GenerationClient,
}

impl AskQuestionHandler {
    /// `generator` should carry the quick-answer settings and fallback.
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        composer: PromptComposer,
        generator: GenerationClient,
    ) -> Self {
        Self {
            catalog,
            composer,
            generator,
        }
    }

    pub async fn handle(&self, query: AskQuestionQuery) -> Result<AskQuestionResult, AskQuestionError> {
        if query.question.trim().is_empty() {
            return Err(AskQuestionError::MissingQuestion);
        }
        let question = query.question.as_str();

        let context = load_context(self.catalog.as_ref()).await;
        let prompt = self.composer.compose_quick(context.as_ref(), question);

        let reply = self
            .generator
            .sanitize(self.generator.generate(prompt.text).await);

        tracing::info!(is_error = reply.is_error(), "quick question answered");

        Ok(AskQuestionResult {
            is_error: reply.is_error(),
            answer: reply.text,
        })
    }
}
