//! In-memory catalog for tests and local runs without a database.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::catalog::{FaqDraft, FaqRecord, ServiceDraft, ServiceRecord};
use crate::domain::foundation::{DomainError, ErrorCode, FaqId, ServiceId, Timestamp};
use crate::ports::{CatalogReader, CatalogRepository};

/// Services and FAQs held in memory.
///
/// `fail_reads` makes every read report `DataUnavailable`, which lets tests
/// drive the pipeline's degraded path.
#[derive(Default)]
pub struct InMemoryCatalog {
    services: RwLock<Vec<ServiceRecord>>,
    faqs: RwLock<Vec<FaqRecord>>,
    fail_reads: AtomicBool,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with records.
    pub fn with_records(services: Vec<ServiceRecord>, faqs: Vec<FaqRecord>) -> Self {
        Self {
            services: RwLock::new(services),
            faqs: RwLock::new(faqs),
            fail_reads: AtomicBool::new(false),
        }
    }

    /// Toggles simulated read failures.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::data_unavailable("catalog store unreachable"));
        }
        Ok(())
    }
}

fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    sorted
}

fn service_not_found(id: ServiceId) -> DomainError {
    DomainError::new(ErrorCode::ServiceNotFound, format!("Service not found: {}", id))
}

fn faq_not_found(id: FaqId) -> DomainError {
    DomainError::new(ErrorCode::FaqNotFound, format!("FAQ not found: {}", id))
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, DomainError> {
        self.check_available()?;
        let services = self.services.read().await;
        Ok(newest_first(&services, |s| s.created_at))
    }

    async fn list_faqs(&self) -> Result<Vec<FaqRecord>, DomainError> {
        self.check_available()?;
        let faqs = self.faqs.read().await;
        Ok(newest_first(&faqs, |f| f.created_at))
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn create_service(&self, draft: ServiceDraft) -> Result<ServiceRecord, DomainError> {
        let record = ServiceRecord::from_draft(draft);
        self.services.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_service(
        &self,
        id: ServiceId,
        draft: ServiceDraft,
    ) -> Result<ServiceRecord, DomainError> {
        let mut services = self.services.write().await;
        let record = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| service_not_found(id))?;
        record.apply(draft);
        Ok(record.clone())
    }

    async fn delete_service(&self, id: ServiceId) -> Result<(), DomainError> {
        let mut services = self.services.write().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Err(service_not_found(id));
        }
        Ok(())
    }

    async fn create_faq(&self, draft: FaqDraft) -> Result<FaqRecord, DomainError> {
        let record = FaqRecord::from_draft(draft);
        self.faqs.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_faq(&self, id: FaqId, draft: FaqDraft) -> Result<FaqRecord, DomainError> {
        let mut faqs = self.faqs.write().await;
        let record = faqs
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| faq_not_found(id))?;
        record.apply(draft);
        Ok(record.clone())
    }

    async fn delete_faq(&self, id: FaqId) -> Result<(), DomainError> {
        let mut faqs = self.faqs.write().await;
        let before = faqs.len();
        faqs.retain(|f| f.id != id);
        if faqs.len() == before {
            return Err(faq_not_found(id));
        }
        Ok(())
    }
}
