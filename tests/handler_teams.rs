mod common;

use axum::http::{HeaderName, HeaderValue};
use axum::{Router, routing::get};
use axum_test::TestServer;
use invoice_reporter::api::handlers::teams_handler;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_server(gateway: Arc<common::StubGateway>) -> TestServer {
    let app = Router::new()
        .route("/api/teams", get(teams_handler))
        .with_state(common::test_state(gateway));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_teams_passthrough() {
    let gateway = Arc::new(common::StubGateway {
        teams: json!({ "Records": [{ "Name": "Acme" }, { "Name": "Globex" }] }),
        ..common::StubGateway::new()
    });
    let server = test_server(gateway);

    let response = server
        .get("/api/teams")
        .add_header(
            HeaderName::from_static("username"),
            HeaderValue::from_static("ops@example.com"),
        )
        .add_header(
            HeaderName::from_static("password"),
            HeaderValue::from_static("pw"),
        )
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["Records"][0]["Name"], "Acme");
    assert_eq!(body["Records"][1]["Name"], "Globex");
}

#[tokio::test]
async fn test_teams_requires_credential_headers() {
    let server = test_server(Arc::new(common::StubGateway::new()));

    let response = server.get("/api/teams").await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_teams_upstream_rejection_is_bad_gateway() {
    let gateway = Arc::new(common::StubGateway {
        access_ok: false,
        ..common::StubGateway::new()
    });
    let server = test_server(gateway);

    let response = server
        .get("/api/teams")
        .add_header(
            HeaderName::from_static("username"),
            HeaderValue::from_static("ops@example.com"),
        )
        .add_header(
            HeaderName::from_static("password"),
            HeaderValue::from_static("pw"),
        )
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "upstream_error");
}
