//! Data transfer objects for admin endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::catalog::{FaqInput, ServiceInput};

/// Body of service create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub title: String,
    pub requirements: String,
    pub price: f64,
    pub duration: String,
}

impl From<ServiceRequest> for ServiceInput {
    fn from(req: ServiceRequest) -> Self {
        ServiceInput {
            title: req.title,
            requirements: req.requirements,
            price: req.price,
            duration: req.duration,
        }
    }
}

/// Body of FAQ create/update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqRequest {
    pub question: String,
    pub answer: String,
}

impl From<FaqRequest> for FaqInput {
    fn from(req: FaqRequest) -> Self {
        FaqInput {
            question: req.question,
            answer: req.answer,
        }
    }
}

/// `{"data": ...}` envelope for admin responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
