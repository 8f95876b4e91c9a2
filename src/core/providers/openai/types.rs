use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(in crate::core::providers) struct ChatRequest {
    pub(in crate::core::providers) model: String,
    pub(in crate::core::providers) messages: Vec<Message>,
    pub(in crate::core::providers) temperature: f64,
    pub(in crate::core::providers) stream: bool,
    pub(in crate::core::providers) stream_options: StreamOptions,
}

#[derive(Debug, Serialize)]
pub(in crate::core::providers) struct StreamOptions {
    pub(in crate::core::providers) include_usage: bool,
}

#[derive(Debug, Serialize)]
pub(in crate::core::providers) struct Message {
    pub(in crate::core::providers) role: &'static str,
    pub(in crate::core::providers) content: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::core::providers) struct Usage {
    pub(in crate::core::providers) prompt_tokens: u64,
    pub(in crate::core::providers) completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
pub(in crate::core::providers) struct ChatCompletionChunk {
    pub(in crate::core::providers) model: Option<String>,
    #[serde(default)]
    pub(in crate::core::providers) choices: Vec<ChunkChoice>,
    pub(in crate::core::providers) usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(in crate::core::providers) struct ChunkChoice {
    #[serde(default)]
    pub(in crate::core::providers) delta: ChunkDelta,
    pub(in crate::core::providers) finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(in crate::core::providers) struct ChunkDelta {
    pub(in crate::core::providers) content: Option<String>,
}
