use crate::core::providers::{TextStream, api_error, build_provider_client};
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;

use super::enhancer::Enhancer;

const RELAY_PATH: &str = "/api/enhance";

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    text: &'a str,
    context: &'a str,
}

/// Calls a running relay endpoint instead of the hosted model.
pub struct RelayEnhancer {
    endpoint: url::Url,
    client: Client,
}

impl RelayEnhancer {
    /// `base` is the relay origin, e.g. `http://127.0.0.1:3000`.
    pub fn new(base: &str, timeout_secs: u64) -> Result<Self> {
        let endpoint = url::Url::parse(base)
            .and_then(|url| url.join(RELAY_PATH))
            .with_context(|| format!("invalid relay URL: {base}"))?;
        Ok(Self {
            endpoint,
            client: build_provider_client(timeout_secs),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl Enhancer for RelayEnhancer {
    async fn enhance(&self, text: &str, context: &str) -> Result<TextStream> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&RelayRequest { text, context })
            .send()
            .await
            .map_err(|error| anyhow::anyhow!("relay request failed: {error}"))?;

        if !response.status().is_success() {
            return Err(api_error("relay", response).await);
        }

        let mut bytes = response.bytes_stream();
        let stream = async_stream::try_stream! {
            let mut decoder = Utf8Decoder::default();
            while let Some(chunk) = bytes.next().await {
                let chunk = chunk.map_err(|error| anyhow::anyhow!("relay stream interrupted: {error}"))?;
                let text = decoder.push(&chunk);
                if !text.is_empty() {
                    yield text;
                }
            }
            let tail = decoder.finish();
            if !tail.is_empty() {
                yield tail;
            }
        };
        Ok(Box::pin(stream))
    }
}

/// Decodes UTF-8 across chunk boundaries, holding back incomplete sequences.
#[derive(Debug, Default)]
pub(crate) struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub(crate) fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut out = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(valid) => {
                    out.push_str(valid);
                    self.pending.clear();
                    return out;
                }
                Err(error) => {
                    let valid_up_to = error.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[..valid_up_to]));
                    match error.error_len() {
                        // Truncated sequence at the end: wait for more bytes.
                        None => {
                            self.pending.drain(..valid_up_to);
                            return out;
                        }
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid_up_to + len);
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn finish(self) -> String {
        String::from_utf8_lossy(&self.pending).into_owned()
    }
}
