use crate::core::enhance::ENHANCE_MODEL;
use crate::core::providers::{ProviderStream, StreamEvent, sanitize_api_error};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::header,
    response::{IntoResponse, Json, Response},
};
use futures_util::{Stream, StreamExt};
use serde::Deserialize;

use super::AppState;
use super::error::ApiError;

/// Relay request body. Absent fields read as `""` and are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnhanceBody {
    pub text: String,
    pub context: String,
}

/// POST /api/enhance: stream the enhanced text back as raw `text/plain`
pub(super) async fn handle_enhance(
    State(state): State<AppState>,
    Json(body): Json<EnhanceBody>,
) -> Response {
    tracing::info!(
        text_len = body.text.len(),
        context_len = body.context.len(),
        "enhance request received"
    );
    tracing::debug!(
        model = ENHANCE_MODEL,
        provider = state.enhancer.provider_name(),
        "opening completion stream"
    );

    let events = match state.enhancer.open(&body.text, &body.context).await {
        Ok(events) => events,
        Err(error) => {
            let message = sanitize_api_error(&error.to_string());
            tracing::warn!(error = %message, "enhance relay could not reach upstream");
            return ApiError::bad_gateway(message).into_response();
        }
    };

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(relay_body(events)),
    )
        .into_response()
}

/// Text deltas as body chunks. An upstream error aborts the body.
fn relay_body(
    mut events: ProviderStream,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + 'static {
    async_stream::try_stream! {
        let mut generated = 0usize;
        while let Some(event) = events.next().await {
            let event = event.map_err(|error| {
                let message = sanitize_api_error(&error.to_string());
                tracing::warn!(error = %message, generated, "enhance stream failed");
                std::io::Error::other(message)
            })?;
            match event {
                StreamEvent::ResponseStart { model } => {
                    tracing::debug!(?model, "upstream stream opened");
                }
                StreamEvent::TextDelta { text } => {
                    generated += text.len();
                    yield Bytes::from(text);
                }
                StreamEvent::Done {
                    stop_reason,
                    input_tokens,
                    output_tokens,
                } => {
                    tracing::info!(
                        generated,
                        ?stop_reason,
                        ?input_tokens,
                        ?output_tokens,
                        "enhance stream finished"
                    );
                }
            }
        }
    }
}
