//! HTTP tests: drive the router with `tower::ServiceExt::oneshot`.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use common::{app_state, CountingStore, MockLlm, REPLY};
use serde_json::{json, Value};
use tower::ServiceExt;
use tutor_server::{router, OPAQUE_ERROR};

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_returns_model_reply() {
    let app = router(app_state(CountingStore::new(), MockLlm::replying(REPLY)));

    let response = app
        .oneshot(chat_request(
            r#"{"botType":"Tutor","prompt":"What is recursion?","userId":"alice","historyEnabled":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "response": REPLY }));
}

#[tokio::test]
async fn test_chat_without_prompt_is_bad_request() {
    let app = router(app_state(CountingStore::new(), MockLlm::replying(REPLY)));

    let response = app
        .oneshot(chat_request(r#"{"botType":"Tutor","userId":"alice"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = router(app_state(CountingStore::new(), MockLlm::replying(REPLY)));

    let response = app.oneshot(chat_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_provider_failure_is_opaque_500() {
    let app = router(app_state(CountingStore::new(), MockLlm::failing()));

    let response = app
        .oneshot(chat_request(r#"{"prompt":"What is recursion?","userId":"alice"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({ "error": OPAQUE_ERROR }));
}

#[tokio::test]
async fn test_store_failure_is_opaque_500() {
    let app = router(app_state(CountingStore::unreachable(), MockLlm::replying(REPLY)));

    let response = app
        .oneshot(chat_request(r#"{"prompt":"What is recursion?","userId":"alice"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], OPAQUE_ERROR);
    assert!(!body.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_ping_reports_store_connection() {
    let app = router(app_state(CountingStore::new(), MockLlm::replying(REPLY)));

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Vector store connection successful" })
    );
}

#[tokio::test]
async fn test_ping_reports_store_failure() {
    let app = router(app_state(CountingStore::unreachable(), MockLlm::replying(REPLY)));

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json_body(response).await["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = router(app_state(CountingStore::new(), MockLlm::replying(REPLY)));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ping")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
