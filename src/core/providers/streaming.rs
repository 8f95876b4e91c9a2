use anyhow::Result;
use futures_util::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::pin::Pin;

pub type ProviderStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send + 'static>>;

/// Raw text chunks whose concatenation is the full completion.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send + 'static>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    ContentFilter,
    Other,
}

impl StopReason {
    pub fn from_finish_reason(finish_reason: &str) -> Self {
        match finish_reason {
            "stop" => Self::EndTurn,
            "length" => Self::MaxTokens,
            "content_filter" => Self::ContentFilter,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StreamEvent {
    ResponseStart {
        model: Option<String>,
    },
    TextDelta {
        text: String,
    },
    Done {
        stop_reason: Option<StopReason>,
        input_tokens: Option<u64>,
        output_tokens: Option<u64>,
    },
}

/// Fully assembled completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
    pub model: Option<String>,
    pub stop_reason: Option<StopReason>,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

#[derive(Debug, Default)]
pub struct StreamCollector {
    response: CompletionResponse,
}

impl StreamCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, event: &StreamEvent) {
        match event {
            StreamEvent::ResponseStart { model } => {
                self.response.model.clone_from(model);
            }
            StreamEvent::TextDelta { text } => {
                self.response.text.push_str(text);
            }
            StreamEvent::Done {
                stop_reason,
                input_tokens,
                output_tokens,
            } => {
                self.response.stop_reason = *stop_reason;
                self.response.input_tokens = *input_tokens;
                self.response.output_tokens = *output_tokens;
            }
        }
    }

    pub fn finish(self) -> CompletionResponse {
        self.response
    }
}

/// Drain a provider stream into a single response.
pub async fn collect_stream(mut stream: ProviderStream) -> Result<CompletionResponse> {
    let mut collector = StreamCollector::new();
    while let Some(event) = stream.next().await {
        collector.feed(&event?);
    }
    Ok(collector.finish())
}

/// Keep only the text deltas of a provider stream.
pub fn text_deltas(stream: ProviderStream) -> TextStream {
    Box::pin(stream.filter_map(|event| async move {
        match event {
            Ok(StreamEvent::TextDelta { text }) => Some(Ok(text)),
            Ok(StreamEvent::ResponseStart { .. } | StreamEvent::Done { .. }) => None,
            Err(error) => Some(Err(error)),
        }
    }))
}

#[cfg(test)]
mod tests;
