use crate::core::providers::{Provider, ProviderStream, TextStream, text_deltas};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::prompt::enhance_request;

/// Something that turns rough text into a stream of enhanced text chunks.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, text: &str, context: &str) -> Result<TextStream>;
}

/// Talks to the hosted model directly with the fixed prompt template.
pub struct ProviderEnhancer {
    provider: Arc<dyn Provider>,
    temperature: f64,
}

impl ProviderEnhancer {
    pub fn new(provider: Arc<dyn Provider>, temperature: f64) -> Self {
        Self {
            provider,
            temperature,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Full event stream, for callers that also want model and usage.
    pub async fn open(&self, text: &str, context: &str) -> Result<ProviderStream> {
        let request = enhance_request(text, context, self.temperature);
        self.provider.stream_completion(&request).await
    }
}

#[async_trait]
impl Enhancer for ProviderEnhancer {
    async fn enhance(&self, text: &str, context: &str) -> Result<TextStream> {
        Ok(text_deltas(self.open(text, context).await?))
    }
}
