pub mod http_client;
pub mod openai;
pub mod scrub;
pub mod sse;
pub mod streaming;
pub mod traits;

pub use http_client::build_provider_client;
pub use openai::OpenAiProvider;
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use streaming::{
    CompletionResponse, ProviderStream, StopReason, StreamCollector, StreamEvent, TextStream,
    collect_stream, text_deltas,
};
pub use traits::{CompletionRequest, Provider};
