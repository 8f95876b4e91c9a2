use super::actions::{InvokeBody, RenderBody, handle_invoke, handle_render};
use super::enhance::handle_enhance;
use super::handlers::{
    SurfaceQuery, handle_create_session, handle_health, handle_list_actions, handle_readable,
};
use super::wizard::{Direction, StepBody, handle_step, handle_submit, handle_wizard};
use super::*;
use crate::core::actions::{InvocationStatus, Surface};
use crate::core::providers::{CompletionRequest, Provider, ProviderStream, StreamEvent};
use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Streams fixed chunks and records the last request it saw.
struct ChunkProvider {
    chunks: Vec<&'static str>,
    fail_after: bool,
    seen: Mutex<Option<CompletionRequest>>,
}

impl ChunkProvider {
    fn new(chunks: Vec<&'static str>) -> Self {
        Self {
            chunks,
            fail_after: false,
            seen: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Provider for ChunkProvider {
    fn name(&self) -> &str {
        "chunks"
    }

    async fn stream_completion(
        &self,
        request: &CompletionRequest,
    ) -> anyhow::Result<ProviderStream> {
        *self.seen.lock().unwrap() = Some(request.clone());
        let mut events: Vec<anyhow::Result<StreamEvent>> = self
            .chunks
            .iter()
            .map(|chunk| {
                Ok(StreamEvent::TextDelta {
                    text: (*chunk).to_string(),
                })
            })
            .collect();
        if self.fail_after {
            events.push(Err(anyhow::anyhow!("upstream reset")));
        }
        Ok(Box::pin(futures_util::stream::iter(events)))
    }
}

struct DownProvider;

#[async_trait]
impl Provider for DownProvider {
    fn name(&self) -> &str {
        "down"
    }

    async fn stream_completion(&self, _: &CompletionRequest) -> anyhow::Result<ProviderStream> {
        anyhow::bail!("OpenAI API error (401): bad key sk-live-abcdefghijklmnop")
    }
}

fn state_with(provider: Arc<dyn Provider>) -> AppState {
    AppState::new(
        ProviderEnhancer::new(provider, 0.7),
        Duration::from_millis(10),
    )
}

fn test_state() -> AppState {
    state_with(Arc::new(ChunkProvider::new(vec!["ok"])))
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn new_session(state: &AppState) -> String {
    let response = handle_create_session(State(state.clone()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn security_body_limit_is_64kb() {
    assert_eq!(MAX_BODY_SIZE, 65_536);
}

#[test]
fn security_timeout_is_30_seconds() {
    assert_eq!(REQUEST_TIMEOUT_SECS, 30);
}

#[test]
fn app_state_is_clone() {
    fn assert_clone<T: Clone>() {}
    assert_clone::<AppState>();
}

#[test]
fn loopback_hosts_are_not_public() {
    assert!(!is_public_bind("127.0.0.1"));
    assert!(!is_public_bind("localhost"));
    assert!(!is_public_bind("::1"));
    assert!(is_public_bind("0.0.0.0"));
    assert!(is_public_bind("192.168.1.20"));
}

#[test]
fn enhance_body_defaults_missing_fields_to_empty() {
    let body: EnhanceBody = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
    assert_eq!(body.text, "hi");
    assert_eq!(body.context, "");
    let body: EnhanceBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body, EnhanceBody::default());
}

#[tokio::test]
async fn health_reports_session_count() {
    let state = test_state();
    new_session(&state).await;
    let response = handle_health(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions"], 1);
}

#[tokio::test]
async fn enhance_streams_plain_text_and_uses_template() {
    let provider = Arc::new(ChunkProvider::new(vec!["John delivered ", "strong results."]));
    let state = state_with(provider.clone());

    let response = handle_enhance(
        State(state),
        Json(EnhanceBody {
            text: "john did good work".into(),
            context: "a performance review".into(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"John delivered strong results.");

    let seen = provider.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.model, "gpt-4o-mini");
    assert!(seen.prompt.ends_with("john did good work"));
    assert!(
        seen.system_prompt
            .unwrap()
            .contains("Context for this text: a performance review")
    );
}

#[tokio::test]
async fn enhance_forwards_empty_text() {
    let provider = Arc::new(ChunkProvider::new(vec![]));
    let state = state_with(provider.clone());
    let response = handle_enhance(State(state), Json(EnhanceBody::default())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let seen = provider.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.prompt, "Please enhance and improve this text:\n\n");
}

#[tokio::test]
async fn enhance_upstream_failure_is_sanitized_bad_gateway() {
    let state = state_with(Arc::new(DownProvider));
    let response = handle_enhance(State(state), Json(EnhanceBody::default())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("401"));
    assert!(!error.contains("abcdefghijklmnop"));
}

#[tokio::test]
async fn enhance_mid_stream_failure_aborts_body() {
    let mut provider = ChunkProvider::new(vec!["partial"]);
    provider.fail_after = true;
    let state = state_with(Arc::new(provider));
    let response = handle_enhance(State(state), Json(EnhanceBody::default())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn list_actions_filters_by_surface() {
    let response = handle_list_actions(Query(SurfaceQuery {
        surface: Some(Surface::Playground),
    }))
    .await
    .into_response();
    let json = body_json(response).await;
    let actions = json["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["name"], "incrementCounter");
    assert_eq!(actions[0]["parameters"][0]["type"], "number");

    let response = handle_list_actions(Query(SurfaceQuery::default()))
        .await
        .into_response();
    assert_eq!(body_json(response).await["actions"].as_array().unwrap().len(), 33);
}

#[tokio::test]
async fn readables_skip_surfaces_without_state() {
    let state = test_state();
    let id = new_session(&state).await;

    let response = handle_readable(
        State(state.clone()),
        Path(id.clone()),
        Query(SurfaceQuery {
            surface: Some(Surface::Compare),
        }),
    )
    .await
    .into_response();
    assert_eq!(body_json(response).await["readables"], json!([]));

    let response = handle_readable(State(state), Path(id), Query(SurfaceQuery::default()))
        .await
        .into_response();
    let json = body_json(response).await;
    let surfaces: Vec<&str> = json["readables"]
        .as_array()
        .unwrap()
        .iter()
        .map(|readable| readable["surface"].as_str().unwrap())
        .collect();
    assert_eq!(
        surfaces,
        ["wizard", "onboarding", "playground", "document", "application", "dashboard"]
    );
}

#[tokio::test]
async fn invoke_applies_once_per_id() {
    let state = test_state();
    let id = new_session(&state).await;

    for _ in 0..2 {
        let response = handle_invoke(
            State(state.clone()),
            Path(id.clone()),
            Json(InvokeBody {
                id: Some("call-7".into()),
                name: "incrementCounter".into(),
                arguments: json!({"amount": 2}),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"], "Counter incremented by 2. New value: 2");
    }

    let session = state.sessions.get(&id).await.unwrap();
    assert!((session.lock().await.playground.counter - 2.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn invoke_on_unknown_session_is_not_found() {
    let state = test_state();
    let response = handle_invoke(
        State(state),
        Path(uuid::Uuid::new_v4().to_string()),
        Json(InvokeBody {
            id: None,
            name: "checkMissingFields".into(),
            arguments: Value::Null,
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .starts_with("session not found"));
}

#[tokio::test]
async fn invoke_with_unknown_action_is_rejected() {
    let state = test_state();
    let id = new_session(&state).await;
    let response = handle_invoke(
        State(state),
        Path(id),
        Json(InvokeBody {
            id: None,
            name: "wipeProfile".into(),
            arguments: json!({}),
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn render_returns_loading_view() {
    let state = test_state();
    let id = new_session(&state).await;
    let response = handle_render(
        State(state),
        Path(id),
        Json(RenderBody {
            name: "enhanceText".into(),
            arguments: json!({}),
            status: InvocationStatus::Executing,
        }),
    )
    .await
    .into_response();
    let json = body_json(response).await;
    assert_eq!(json, json!({"kind": "loading", "message": "Enhancing text..."}));
}

#[tokio::test]
async fn step_route_jumps_and_moves() {
    let state = test_state();
    let id = new_session(&state).await;

    let jump = |body: StepBody| handle_step(State(state.clone()), Path(id.clone()), Json(body));

    let json = body_json(
        jump(StepBody {
            step: Some(9.0),
            direction: None,
        })
        .await
        .into_response(),
    )
    .await;
    assert_eq!(json["step"]["number"], 4);
    assert_eq!(json["step"]["title"], "Review");

    let json = body_json(
        jump(StepBody {
            step: None,
            direction: Some(Direction::Next),
        })
        .await
        .into_response(),
    )
    .await;
    assert_eq!(json["moved"], false);

    let response = jump(StepBody::default()).await.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wizard_view_includes_review_and_missing() {
    let state = test_state();
    let id = new_session(&state).await;
    let json = body_json(
        handle_wizard(State(state), Path(id))
            .await
            .into_response(),
    )
    .await;
    assert_eq!(json["state"]["missingFields"].as_array().unwrap().len(), 6);
    assert_eq!(json["canSubmit"], false);
    assert_eq!(json["review"][0]["title"], "Personal Information");
    assert_eq!(json["steps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn submit_refuses_incomplete_profile() {
    let state = test_state();
    let id = new_session(&state).await;
    let response = handle_submit(State(state), Path(id)).await.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("fullName"));
}

#[tokio::test]
async fn submit_completes_and_resets_record() {
    let state = test_state();
    let id = new_session(&state).await;
    {
        let session = state.sessions.get(&id).await.unwrap();
        let mut session = session.lock().await;
        for field in crate::core::wizard::ProfileField::REQUIRED {
            session.wizard.set_field(field, "x");
        }
    }

    let response = handle_submit(State(state.clone()), Path(id.clone()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["filledFields"], 6);

    let session = state.sessions.get(&id).await.unwrap();
    assert_eq!(session.lock().await.wizard.record().filled_count(), 0);
}
