//! PostgreSQL implementation of CatalogReader and CatalogRepository.
//!
//! Tables: `services (id, title, requirements, price, duration, created_at)`
//! and `faqs (id, question, answer, created_at)`. `price` may be stored as
//! NUMERIC; it is always read back through a `float8` cast.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::catalog::{FaqDraft, FaqRecord, ServiceDraft, ServiceRecord};
use crate::domain::foundation::{DomainError, ErrorCode, FaqId, ServiceId, Timestamp};
use crate::ports::{CatalogReader, CatalogRepository};

const SERVICE_COLUMNS: &str = "id, title, requirements, price::float8 AS price, duration, created_at";
const FAQ_COLUMNS: &str = "id, question, answer, created_at";

/// PostgreSQL-backed catalog.
#[derive(Clone)]
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    /// Creates a new PostgresCatalog.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Listing query for the admin pages and the prompt, newest record first.
fn newest_first(table: &str, columns: &str) -> String {
    format!("SELECT {} FROM {} ORDER BY created_at DESC", columns, table)
}

fn database_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, e),
    )
}

#[async_trait]
impl CatalogReader for PostgresCatalog {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, DomainError> {
        let rows = sqlx::query(&newest_first("services", SERVICE_COLUMNS))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::data_unavailable(format!("Failed to fetch services: {}", e)))?;

        rows.iter().map(row_to_service).collect()
    }

    async fn list_faqs(&self) -> Result<Vec<FaqRecord>, DomainError> {
        let rows = sqlx::query(&newest_first("faqs", FAQ_COLUMNS))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::data_unavailable(format!("Failed to fetch FAQs: {}", e)))?;

        rows.iter().map(row_to_faq).collect()
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalog {
    async fn create_service(&self, draft: ServiceDraft) -> Result<ServiceRecord, DomainError> {
        let record = ServiceRecord::from_draft(draft);

        sqlx::query(
            r#"
            INSERT INTO services (id, title, requirements, price, duration, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.title)
        .bind(&record.requirements)
        .bind(record.price)
        .bind(&record.duration)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("insert service", e))?;

        Ok(record)
    }

    async fn update_service(
        &self,
        id: ServiceId,
        draft: ServiceDraft,
    ) -> Result<ServiceRecord, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE services SET
                title = $2,
                requirements = $3,
                price = $4,
                duration = $5
            WHERE id = $1
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(&draft.title)
        .bind(&draft.requirements)
        .bind(draft.price)
        .bind(&draft.duration)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("update service", e))?;

        match row {
            Some(row) => row_to_service(&row),
            None => Err(DomainError::new(
                ErrorCode::ServiceNotFound,
                format!("Service not found: {}", id),
            )),
        }
    }

    async fn delete_service(&self, id: ServiceId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete service", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ServiceNotFound,
                format!("Service not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn create_faq(&self, draft: FaqDraft) -> Result<FaqRecord, DomainError> {
        let record = FaqRecord::from_draft(draft);

        sqlx::query(
            r#"
            INSERT INTO faqs (id, question, answer, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.question)
        .bind(&record.answer)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("insert FAQ", e))?;

        Ok(record)
    }

    async fn update_faq(&self, id: FaqId, draft: FaqDraft) -> Result<FaqRecord, DomainError> {
        let row = sqlx::query(&format!(
            "UPDATE faqs SET question = $2, answer = $3 WHERE id = $1 RETURNING {}",
            FAQ_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(&draft.question)
        .bind(&draft.answer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("update FAQ", e))?;

        match row {
            Some(row) => row_to_faq(&row),
            None => Err(DomainError::new(
                ErrorCode::FaqNotFound,
                format!("FAQ not found: {}", id),
            )),
        }
    }

    async fn delete_faq(&self, id: FaqId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete FAQ", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::FaqNotFound,
                format!("FAQ not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn row_to_service(row: &PgRow) -> Result<ServiceRecord, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(ServiceRecord {
        id: ServiceId::from_uuid(id),
        title: column(row, "title")?,
        requirements: column(row, "requirements")?,
        price: column(row, "price")?,
        duration: column(row, "duration")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}

fn row_to_faq(row: &PgRow) -> Result<FaqRecord, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;

    Ok(FaqRecord {
        id: FaqId::from_uuid(id),
        question: column(row, "question")?,
        answer: column(row, "answer")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
