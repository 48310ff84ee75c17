//! CatalogReader port - read access to services and FAQs.
//!
//! This is the chat pipeline's data context provider. Reads return the
//! full current listing, newest first; any store failure is reported as
//! `ErrorCode::DataUnavailable`.

use async_trait::async_trait;

use crate::domain::catalog::{FaqRecord, ServiceRecord};
use crate::domain::foundation::DomainError;

/// Read-only view of the barangay catalog.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All service listings, newest first.
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, DomainError>;

    /// All FAQs, newest first.
    async fn list_faqs(&self) -> Result<Vec<FaqRecord>, DomainError>;
}
