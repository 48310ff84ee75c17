//! CatalogRepository port - admin writes to services and FAQs.

use async_trait::async_trait;

use crate::domain::catalog::{FaqDraft, FaqRecord, ServiceDraft, ServiceRecord};
use crate::domain::foundation::{DomainError, FaqId, ServiceId};

/// Write access to the catalog.
///
/// Updates and deletes of unknown ids fail with `ServiceNotFound` /
/// `FaqNotFound`.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Stores a new service and returns it with its assigned id.
    async fn create_service(&self, draft: ServiceDraft) -> Result<ServiceRecord, DomainError>;

    /// Replaces the editable fields of a service.
    async fn update_service(
        &self,
        id: ServiceId,
        draft: ServiceDraft,
    ) -> Result<ServiceRecord, DomainError>;

    /// Removes a service.
    async fn delete_service(&self, id: ServiceId) -> Result<(), DomainError>;

    /// Stores a new FAQ and returns it with its assigned id.
    async fn create_faq(&self, draft: FaqDraft) -> Result<FaqRecord, DomainError>;

    /// Replaces question and answer of an FAQ.
    async fn update_faq(&self, id: FaqId, draft: FaqDraft) -> Result<FaqRecord, DomainError>;

    /// Removes an FAQ.
    async fn delete_faq(&self, id: FaqId) -> Result<(), DomainError>;
}
