//! HTTP handlers for the catalog admin endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::catalog::{ManageFaqsHandler, ManageServicesHandler};
use crate::domain::catalog::{FaqRecord, ServiceRecord};
use crate::domain::foundation::{FaqId, ServiceId};

use super::dto::{DataResponse, FaqRequest, ServiceRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminAppState {
    services: Arc<ManageServicesHandler>,
    faqs: Arc<ManageFaqsHandler>,
}

impl AdminAppState {
    pub fn new(services: Arc<ManageServicesHandler>, faqs: Arc<ManageFaqsHandler>) -> Self {
        Self { services, faqs }
    }
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn service_id(raw: &str) -> Result<ServiceId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid service id: {}", raw)))
}

fn faq_id(raw: &str) -> Result<FaqId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid FAQ id: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════
// Services
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/services - All services, newest first
pub async fn list_services(
    State(state): State<AdminAppState>,
) -> Result<Json<DataResponse<Vec<ServiceRecord>>>, ApiError> {
    let services = state.services.list().await?;
    Ok(Json(DataResponse::new(services)))
}

/// POST /api/admin/services - Create a service
pub async fn create_service(
    State(state): State<AdminAppState>,
    payload: Result<Json<ServiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<ServiceRecord>>), ApiError> {
    let req = body(payload)?;
    let record = state.services.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(record))))
}

/// PUT /api/admin/services/:id - Replace a service's fields
pub async fn update_service(
    State(state): State<AdminAppState>,
    Path(id): Path<String>,
    payload: Result<Json<ServiceRequest>, JsonRejection>,
) -> Result<Json<DataResponse<ServiceRecord>>, ApiError> {
    let id = service_id(&id)?;
    let req = body(payload)?;
    let record = state.services.update(id, req.into()).await?;
    Ok(Json(DataResponse::new(record)))
}

/// DELETE /api/admin/services/:id - Remove a service
pub async fn delete_service(
    State(state): State<AdminAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = service_id(&id)?;
    state.services.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════
// FAQs
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/faqs - All FAQs, newest first
pub async fn list_faqs(
    State(state): State<AdminAppState>,
) -> Result<Json<DataResponse<Vec<FaqRecord>>>, ApiError> {
    let faqs = state.faqs.list().await?;
    Ok(Json(DataResponse::new(faqs)))
}

/// POST /api/admin/faqs - Create an FAQ
pub async fn create_faq(
    State(state): State<AdminAppState>,
    payload: Result<Json<FaqRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<FaqRecord>>), ApiError> {
    let req = body(payload)?;
    let record = state.faqs.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(record))))
}

/// PUT /api/admin/faqs/:id - Replace question and answer
pub async fn update_faq(
    State(state): State<AdminAppState>,
    Path(id): Path<String>,
    payload: Result<Json<FaqRequest>, JsonRejection>,
) -> Result<Json<DataResponse<FaqRecord>>, ApiError> {
    let id = faq_id(&id)?;
    let req = body(payload)?;
    let record = state.faqs.update(id, req.into()).await?;
    Ok(Json(DataResponse::new(record)))
}

/// DELETE /api/admin/faqs/:id - Remove an FAQ
pub async fn delete_faq(
    State(state): State<AdminAppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = faq_id(&id)?;
    state.faqs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
