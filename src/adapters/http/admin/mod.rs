//! Catalog admin HTTP adapter - CRUD for services and FAQs.

mod dto;
mod handlers;
mod routes;

pub use dto::{DataResponse, FaqRequest, ServiceRequest};
pub use handlers::AdminAppState;
pub use routes::admin_routes;
