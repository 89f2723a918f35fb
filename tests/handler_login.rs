mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use invoice_reporter::api::handlers::login_handler;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_server(gateway: Arc<common::StubGateway>) -> TestServer {
    let app = Router::new()
        .route("/api/login", post(login_handler))
        .with_state(common::test_state(gateway));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_login_success() {
    let server = test_server(Arc::new(common::StubGateway::new()));

    let response = server
        .post("/api/login")
        .json(&json!({ "email": "ops@example.com", "password": "pw" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Login successful");
}

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    let server = test_server(Arc::new(common::StubGateway::new()));

    let response = server
        .post("/api/login")
        .json(&json!({ "email": "ops", "password": "pw" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_login_rejects_empty_password() {
    let server = test_server(Arc::new(common::StubGateway::new()));

    let response = server
        .post("/api/login")
        .json(&json!({ "email": "ops@example.com", "password": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_login_upstream_rejection_is_unauthorized() {
    let gateway = Arc::new(common::StubGateway {
        access_ok: false,
        ..common::StubGateway::new()
    });
    let server = test_server(gateway);

    let response = server
        .post("/api/login")
        .json(&json!({ "email": "ops@example.com", "password": "wrong" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "unauthorized");
}
