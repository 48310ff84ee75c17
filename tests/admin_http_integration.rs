//! Integration tests for the catalog admin HTTP endpoints.
//!
//! Verifies status codes and bodies for service and FAQ CRUD, and that
//! admin edits are what the chatbot grounds its next answer on.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use baranguide::adapters::ai::MockAIProvider;
use baranguide::adapters::http::{app_router, AdminAppState, ChatAppState, RouterOptions};
use baranguide::adapters::memory::{InMemoryCatalog, InMemoryConversationLog};
use baranguide::application::{
    AskQuestionHandler, ConversationLogger, ConversationLoggerWorker, GenerationClient,
    GenerationSettings, GetChatHistoryHandler, ManageFaqsHandler, ManageServicesHandler,
    SendChatMessageHandler,
};
use baranguide::domain::conversation::{ContextBudget, PromptComposer};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// The logger worker is returned so a test can drain it before reading the log.
fn test_router(
    catalog: Arc<InMemoryCatalog>,
    provider: MockAIProvider,
) -> (Router, ConversationLoggerWorker) {
    let log = Arc::new(InMemoryConversationLog::new());
    let composer = PromptComposer::new(ContextBudget::unlimited());
    let generator = GenerationClient::new(Arc::new(provider), GenerationSettings::default());
    let (logger, worker) = ConversationLogger::spawn(log.clone(), 16);

    let chat = ChatAppState::new(
        Arc::new(SendChatMessageHandler::new(
            catalog.clone(),
            log.clone(),
            composer.clone(),
            generator.clone(),
            logger,
            5,
        )),
        Arc::new(AskQuestionHandler::new(catalog.clone(), composer, generator)),
        Arc::new(GetChatHistoryHandler::new(log)),
    );
    let admin = AdminAppState::new(
        Arc::new(ManageServicesHandler::new(catalog.clone(), catalog.clone())),
        Arc::new(ManageFaqsHandler::new(catalog.clone(), catalog)),
    );

    (app_router(chat, admin, &RouterOptions::default()), worker)
}

fn empty_router() -> (Router, ConversationLoggerWorker) {
    test_router(Arc::new(InMemoryCatalog::new()), MockAIProvider::new())
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn clearance_body() -> Value {
    json!({
        "title": "Barangay Clearance",
        "requirements": "Valid ID\nCedula",
        "price": 50,
        "duration": "1 day"
    })
}

// =============================================================================
// Services
// =============================================================================

#[tokio::test]
async fn service_crud_round() {
    let (router, _worker) = empty_router();

    let (status, created) = send(
        &router,
        request("POST", "/api/admin/services", Some(clearance_body())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["title"], "Barangay Clearance");
    assert_eq!(created["data"]["price"], 50.0);
    assert!(created["data"]["createdAt"].is_string());
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &router,
        request(
            "PUT",
            &format!("/api/admin/services/{}", id),
            Some(json!({
                "title": "Barangay Clearance",
                "requirements": "Valid ID",
                "price": 75.5,
                "duration": "2 days"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], id.as_str());
    assert_eq!(updated["data"]["price"], 75.5);
    assert_eq!(updated["data"]["duration"], "2 days");
    assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);

    let (status, listed) = send(&router, request("GET", "/api/admin/services", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &router,
        request("DELETE", &format!("/api/admin/services/{}", id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, listed) = send(&router, request("GET", "/api/admin/services", None)).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn service_list_is_newest_first() {
    let (router, _worker) = empty_router();

    for title in ["Cedula", "Business Permit"] {
        let mut body = clearance_body();
        body["title"] = json!(title);
        send(&router, request("POST", "/api/admin/services", Some(body))).await;
    }

    let (_, listed) = send(&router, request("GET", "/api/admin/services", None)).await;
    let titles: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Business Permit", "Cedula"]);
}

#[tokio::test]
async fn service_create_rejects_blank_title() {
    let (router, _worker) = empty_router();
    let mut body = clearance_body();
    body["title"] = json!("   ");

    let (status, body) = send(&router, request("POST", "/api/admin/services", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn service_create_rejects_negative_price() {
    let (router, _worker) = empty_router();
    let mut body = clearance_body();
    body["price"] = json!(-1);

    let (status, _) = send(&router, request("POST", "/api/admin/services", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn service_create_rejects_missing_fields() {
    let (router, _worker) = empty_router();

    let (status, body) = send(
        &router,
        request("POST", "/api/admin/services", Some(json!({ "title": "Cedula" }))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn service_update_unknown_id_is_not_found() {
    let (router, _worker) = empty_router();
    let id = uuid::Uuid::new_v4();

    let (status, body) = send(
        &router,
        request(
            "PUT",
            &format!("/api/admin/services/{}", id),
            Some(clearance_body()),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn service_delete_unknown_id_is_not_found() {
    let (router, _worker) = empty_router();
    let id = uuid::Uuid::new_v4();

    let (status, _) = send(
        &router,
        request("DELETE", &format!("/api/admin/services/{}", id), None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_malformed_id_is_bad_request() {
    let (router, _worker) = empty_router();

    let (status, body) = send(
        &router,
        request("DELETE", "/api/admin/services/not-a-uuid", None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid service id: not-a-uuid");
}

#[tokio::test]
async fn service_list_reports_store_outage() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.set_fail_reads(true);
    let (router, _worker) = test_router(catalog, MockAIProvider::new());

    let (status, body) = send(&router, request("GET", "/api/admin/services", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

// =============================================================================
// FAQs
// =============================================================================

#[tokio::test]
async fn faq_crud_round() {
    let (router, _worker) = empty_router();

    let (status, created) = send(
        &router,
        request(
            "POST",
            "/api/admin/faqs",
            Some(json!({
                "question": "What are the office hours?",
                "answer": "Monday to Friday, 8AM to 5PM."
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &router,
        request(
            "PUT",
            &format!("/api/admin/faqs/{}", id),
            Some(json!({
                "question": "What are the office hours?",
                "answer": "Monday to Saturday, 8AM to 5PM."
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["answer"], "Monday to Saturday, 8AM to 5PM.");

    let (status, _) = send(
        &router,
        request("DELETE", &format!("/api/admin/faqs/{}", id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &router,
        request("DELETE", &format!("/api/admin/faqs/{}", id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn faq_create_rejects_blank_answer() {
    let (router, _worker) = empty_router();

    let (status, _) = send(
        &router,
        request(
            "POST",
            "/api/admin/faqs",
            Some(json!({ "question": "Where is the hall?", "answer": "" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Grounding
// =============================================================================

#[tokio::test]
async fn new_service_grounds_the_next_chat_answer() {
    let provider = MockAIProvider::new().with_response("It costs 120 pesos.");
    let (router, _worker) = test_router(Arc::new(InMemoryCatalog::new()), provider.clone());

    send(
        &router,
        request(
            "POST",
            "/api/admin/services",
            Some(json!({
                "title": "Certificate of Indigency",
                "requirements": "Valid ID",
                "price": 120,
                "duration": "Same day"
            })),
        ),
    )
    .await;

    let (status, _) = send(
        &router,
        request(
            "POST",
            "/api/chatbot/message",
            Some(json!({ "message": "How much is an indigency certificate?" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let prompt = provider.last_prompt().unwrap();
    assert!(prompt.contains("Certificate of Indigency"));
    assert!(prompt.contains("120"));
}
