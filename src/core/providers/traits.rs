use super::streaming::{CompletionResponse, ProviderStream, collect_stream};
use anyhow::Result;
use async_trait::async_trait;

/// One system + user turn sent to a hosted completion model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: Option<String>,
    pub prompt: String,
    pub model: String,
    pub temperature: f64,
}

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// Open a streamed completion. Errors before the first byte (auth,
    /// non-2xx status) surface here; later failures arrive inside the stream.
    async fn stream_completion(&self, request: &CompletionRequest) -> Result<ProviderStream>;

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let stream = self.stream_completion(request).await?;
        collect_stream(stream).await
    }
}
