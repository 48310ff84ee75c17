//! HTTP routes for the catalog admin endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_faq, create_service, delete_faq, delete_service, list_faqs, list_services,
    update_faq, update_service, AdminAppState,
};

/// Creates the admin router with all endpoints.
pub fn admin_routes(state: AdminAppState) -> Router {
    Router::new()
        .route("/api/admin/services", get(list_services).post(create_service))
        .route(
            "/api/admin/services/:id",
            put(update_service).delete(delete_service),
        )
        .route("/api/admin/faqs", get(list_faqs).post(create_faq))
        .route("/api/admin/faqs/:id", put(update_faq).delete(delete_faq))
        .with_state(state)
}
