use crate::gateway_harness::{GatewayTestServer, sse_body};
use reqwest::StatusCode;
use serde_json::{Value, json};
use sparkform::core::enhance::{EnhanceState, EnhanceableField, RelayEnhancer, run_enhancement};
use sparkform::error::EnhanceError;
use std::sync::Mutex;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_provider(deltas: &[&str]) -> MockServer {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini", "stream": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(sse_body(deltas)),
        )
        .mount(&provider)
        .await;
    provider
}

#[tokio::test]
async fn relay_streams_raw_text_from_provider() {
    let provider = mock_provider(&["John delivered ", "strong results ", "this quarter."]).await;
    let server = GatewayTestServer::start(&provider.uri()).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/enhance"))
        .json(&json!({"text": "john did good work", "context": "a performance review"}))
        .send()
        .await
        .expect("relay request should complete");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.text().await.unwrap(),
        "John delivered strong results this quarter."
    );

    let received = provider
        .received_requests()
        .await
        .expect("mock server should record received requests");
    assert_eq!(received.len(), 1);
    let upstream: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(
        upstream["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("Context for this text: a performance review")
    );
    assert_eq!(
        upstream["messages"][1]["content"],
        "Please enhance and improve this text:\n\njohn did good work"
    );
}

#[tokio::test]
async fn relay_does_not_validate_body_fields() {
    let provider = mock_provider(&["ok"]).await;
    let server = GatewayTestServer::start(&provider.uri()).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/enhance"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn relay_reports_upstream_rejection_as_bad_gateway() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"error":{"message":"Incorrect API key provided: sk-test-key"}}"#),
        )
        .mount(&provider)
        .await;
    let server = GatewayTestServer::start(&provider.uri()).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/enhance"))
        .json(&json!({"text": "hi", "context": "greeting"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("401"));
    assert!(!error.contains("sk-test-key"));
}

#[tokio::test]
async fn relay_rejects_oversized_body() {
    let provider = mock_provider(&["ok"]).await;
    let server = GatewayTestServer::start(&provider.uri()).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/enhance"))
        .json(&json!({"text": "x".repeat(70_000), "context": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn field_enhances_through_relay_then_undoes() {
    let provider = mock_provider(&["John delivered ", "strong results this quarter."]).await;
    let server = GatewayTestServer::start(&provider.uri()).await;
    let enhancer = RelayEnhancer::new(&server.base(), 5).unwrap();

    let field = Mutex::new(
        EnhanceableField::new("summary", "a performance review").with_value("john did good work"),
    );
    let mut chunks = Vec::new();
    let committed = run_enhancement(&field, &enhancer, |chunk| chunks.push(chunk.to_string()))
        .await
        .unwrap();

    assert_eq!(committed, "John delivered strong results this quarter.");
    assert!(!chunks.is_empty());
    {
        let field = field.lock().unwrap();
        assert_eq!(field.state(), EnhanceState::Enhanced);
        assert_eq!(field.value(), "John delivered strong results this quarter.");
        assert_eq!(field.previous_value(), Some("john did good work"));
    }

    let mut field = field.into_inner().unwrap();
    assert!(field.undo());
    assert_eq!(field.value(), "john did good work");
    assert!(!field.can_undo());
}

#[tokio::test]
async fn empty_field_never_reaches_relay() {
    let provider = mock_provider(&["unused"]).await;
    let server = GatewayTestServer::start(&provider.uri()).await;
    let enhancer = RelayEnhancer::new(&server.base(), 5).unwrap();

    let field = Mutex::new(EnhanceableField::new("summary", "ctx").with_value("   "));
    let err = run_enhancement(&field, &enhancer, |_| {}).await.unwrap_err();

    assert_eq!(err, EnhanceError::EmptyText);
    assert!(provider.received_requests().await.unwrap().is_empty());
}
