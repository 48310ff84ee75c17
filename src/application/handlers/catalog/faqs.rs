//! FAQ admin handlers.

use std::sync::Arc;

use crate::domain::catalog::{FaqDraft, FaqRecord};
use crate::domain::foundation::{DomainError, FaqId};
use crate::ports::{CatalogReader, CatalogRepository};

#[derive(Debug, Clone)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

impl FaqInput {
    fn into_draft(self) -> Result<FaqDraft, DomainError> {
        Ok(FaqDraft::new(self.question, self.answer)?)
    }
}

/// CRUD over FAQs.
pub struct ManageFaqsHandler {
    reader: Arc<dyn CatalogReader>,
    repository: Arc<dyn CatalogRepository>,
}

impl ManageFaqsHandler {
    pub fn new(reader: Arc<dyn CatalogReader>, repository: Arc<dyn CatalogRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn list(&self) -> Result<Vec<FaqRecord>, DomainError> {
        self.reader.list_faqs().await
    }

    pub async fn create(&self, input: FaqInput) -> Result<FaqRecord, DomainError> {
        let record = self.repository.create_faq(input.into_draft()?).await?;
        tracing::info!(faq_id = %record.id, "faq created");
        Ok(record)
    }

    pub async fn update(&self, id: FaqId, input: FaqInput) -> Result<FaqRecord, DomainError> {
        let record = self.repository.update_faq(id, input.into_draft()?).await?;
        tracing::info!(faq_id = %record.id, "faq updated");
        Ok(record)
    }

    pub async fn delete(&self, id: FaqId) -> Result<(), DomainError> {
        self.repository.delete_faq(id).await?;
        tracing::info!(faq_id = %id, "faq deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> ManageFaqsHandler {
        let catalog = Arc::new(InMemoryCatalog::new());
        ManageFaqsHandler::new(catalog.clone(), catalog)
    }

    #[tokio::test]
    async fn update_replaces_text() {
        let handler = handler();
        let created = handler
            .create(FaqInput {
                question: "Open Saturday?".into(),
                answer: "No.".into(),
            })
            .await
            .unwrap();

        let updated = handler
            .update(
                created.id,
                FaqInput {
                    question: "Open Saturday?".into(),
                    answer: "Yes, until noon.".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(handler.list().await.unwrap()[0].answer, "Yes, until noon.");
    }

    #[tokio::test]
    async fn blank_answer_is_rejected() {
        let err = handler()
            .create(FaqInput {
                question: "Open Saturday?".into(),
                answer: " ".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
