//! End-to-end checks against the envelope server.

use std::sync::Arc;

use json_responder::config::AppConfig;
use json_responder::http::server::FIELD_REQUIRED_CODE;
use json_responder::ErrorLogger;
use serde_json::{json, Value};

mod common;

use common::{start_server, RecordingLogger};

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_success_route() {
    let server = start_server(AppConfig::default(), None).await;

    let res = client().get(server.url("/success")).send().await.unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({"status": "success", "code": "OK", "message": "Hello, World!", "data": null})
    );
}

#[tokio::test]
async fn test_success_with_code_route() {
    let server = start_server(AppConfig::default(), None).await;

    let res = client()
        .post(server.url("/success-with-code"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "code": "CREATED",
            "message": "data has been successfully created",
            "data": {"id": 1}
        })
    );
}

#[tokio::test]
async fn test_error_routes_log_through_configured_logger() {
    let logger = Arc::new(RecordingLogger::default());
    let server = start_server(
        AppConfig::default(),
        Some(logger.clone() as Arc<dyn ErrorLogger>),
    )
    .await;

    let res = client()
        .post(server.url("/err"))
        .header("x-request-id", "e2e-1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(res.headers()["x-request-id"], "e2e-1");
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "error",
            "code": "BAD_REQUEST",
            "message": "failed to submit data",
            "errors": ["field 'name' is required"]
        })
    );

    let res = client()
        .post(server.url("/err-with-custom-code"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["code"], FIELD_REQUIRED_CODE);

    let events = logger.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].message, "response error");
    assert_eq!(events[0].request_id.as_deref(), Some("e2e-1"));
    // The request id layer fills in a UUID when the client sends none.
    assert!(events[1].request_id.is_some());
}

#[tokio::test]
async fn test_tracer_id_echoes_request_id() {
    let mut config = AppConfig::default();
    config.responder.expose_tracer_id = true;
    let server = start_server(config, None).await;

    let res = client()
        .get(server.url("/health"))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["tracer_id"], "trace-me");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_plain_404() {
    let server = start_server(AppConfig::default(), None).await;

    let res = client().get(server.url("/missing")).send().await.unwrap();
    assert_eq!(res.status(), 404);
}
