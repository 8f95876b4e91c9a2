pub(super) mod types;

use crate::config::Config;
use crate::core::providers::{
    build_provider_client,
    scrub::api_error,
    sse::{SseBuffer, parse_data_lines_without_done},
    streaming::{ProviderStream, StopReason, StreamEvent},
    traits::{CompletionRequest, Provider},
};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use types::{ChatCompletionChunk, ChatRequest, Message, StreamOptions};

const PROVIDER_NAME: &str = "OpenAI";
const OPENAI_MISSING_API_KEY_MESSAGE: &str =
    "OpenAI API key not set. Set SPARKFORM_API_KEY or OPENAI_API_KEY, or edit config.toml.";

/// Streaming client for an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiProvider {
    /// Pre-computed `"Bearer <key>"` header value.
    cached_auth_header: Option<String>,
    chat_url: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<&str>, base_url: &str, timeout_secs: u64) -> Self {
        Self {
            cached_auth_header: api_key.map(|k| format!("Bearer {k}")),
            chat_url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            client: build_provider_client(timeout_secs),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.resolved_api_key(),
            &config.provider.base_url,
            config.provider.timeout_secs,
        )
    }

    fn build_request(request: &CompletionRequest) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_prompt {
            messages.push(Message {
                role: "system",
                content: system.clone(),
            });
        }
        messages.push(Message {
            role: "user",
            content: request.prompt.clone(),
        });

        ChatRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            stream: true,
            stream_options: StreamOptions {
                include_usage: true,
            },
        }
    }

    async fn call_api_streaming(&self, request: &ChatRequest) -> anyhow::Result<reqwest::Response> {
        let auth_header = self
            .cached_auth_header
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("{OPENAI_MISSING_API_KEY_MESSAGE}"))?;

        let response = self
            .client
            .post(&self.chat_url)
            .header("Authorization", auth_header)
            .json(request)
            .send()
            .await
            .map_err(|error| anyhow::anyhow!("{PROVIDER_NAME} request failed: {error}"))?;

        if !response.status().is_success() {
            return Err(api_error(PROVIDER_NAME, response).await);
        }

        Ok(response)
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn stream_completion(&self, request: &CompletionRequest) -> anyhow::Result<ProviderStream> {
        let chat_request = Self::build_request(request);
        let response = self.call_api_streaming(&chat_request).await?;
        Ok(sse_response_to_provider_stream(response))
    }
}

/// Translate a chat-completions SSE body into provider events.
///
/// A single `Done` is emitted once the body ends, carrying the finish reason
/// and the usage block that OpenAI sends in its trailing chunk.
fn sse_response_to_provider_stream(response: reqwest::Response) -> ProviderStream {
    let mut byte_stream = response.bytes_stream();

    let stream = async_stream::try_stream! {
        let mut sse_buffer = SseBuffer::new();
        let mut sent_start = false;
        let mut stop_reason = None;
        let mut usage = (None, None);

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = chunk_result
                .map_err(|error| anyhow::anyhow!("{PROVIDER_NAME} stream interrupted: {error}"))?;
            sse_buffer.push_chunk(&chunk);

            while let Some(event_block) = sse_buffer.next_event_block() {
                for data in parse_data_lines_without_done(&event_block) {
                    let Ok(chunk) = serde_json::from_str::<ChatCompletionChunk>(data) else {
                        tracing::debug!(data, "skipping undecodable SSE payload");
                        continue;
                    };

                    if !sent_start {
                        yield StreamEvent::ResponseStart {
                            model: chunk.model.clone(),
                        };
                        sent_start = true;
                    }

                    for choice in &chunk.choices {
                        if let Some(content) = &choice.delta.content
                            && !content.is_empty()
                        {
                            yield StreamEvent::TextDelta {
                                text: content.clone(),
                            };
                        }
                        if let Some(finish) = choice.finish_reason.as_deref() {
                            stop_reason = Some(StopReason::from_finish_reason(finish));
                        }
                    }

                    if let Some(u) = &chunk.usage {
                        usage = (Some(u.prompt_tokens), Some(u.completion_tokens));
                    }
                }
            }
        }

        yield StreamEvent::Done {
            stop_reason,
            input_tokens: usage.0,
            output_tokens: usage.1,
        };
    };

    Box::pin(stream)
}
