//! Service listing admin handlers.

use std::sync::Arc;

use crate::domain::catalog::{ServiceDraft, ServiceRecord};
use crate::domain::foundation::{DomainError, ServiceId};
use crate::ports::{CatalogReader, CatalogRepository};

/// Admin input for a service, validated into a `ServiceDraft`.
#[derive(Debug, Clone)]
pub struct ServiceInput {
    pub title: String,
    pub requirements: String,
    pub price: f64,
    pub duration: String,
}

impl ServiceInput {
    fn into_draft(self) -> Result<ServiceDraft, DomainError> {
        Ok(ServiceDraft::new(
            self.title,
            self.requirements,
            self.price,
            self.duration,
        )?)
    }
}

/// CRUD over barangay services.
pub struct ManageServicesHandler {
    reader: Arc<dyn CatalogReader>,
    repository: Arc<dyn CatalogRepository>,
}

impl ManageServicesHandler {
    pub fn new(reader: Arc<dyn CatalogReader>, repository: Arc<dyn CatalogRepository>) -> Self {
        Self { reader, repository }
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<ServiceRecord>, DomainError> {
        self.reader.list_services().await
    }

    pub async fn create(&self, input: ServiceInput) -> Result<ServiceRecord, DomainError> {
        let record = self.repository.create_service(input.into_draft()?).await?;
        tracing::info!(service_id = %record.id, title = %record.title, "service created");
        Ok(record)
    }

    pub async fn update(
        &self,
        id: ServiceId,
        input: ServiceInput,
    ) -> Result<ServiceRecord, DomainError> {
        let record = self.repository.update_service(id, input.into_draft()?).await?;
        tracing::info!(service_id = %record.id, "service updated");
        Ok(record)
    }

    pub async fn delete(&self, id: ServiceId) -> Result<(), DomainError> {
        self.repository.delete_service(id).await?;
        tracing::info!(service_id = %id, "service deleted");
        Ok(())
    }
}
