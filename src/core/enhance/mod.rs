//! Sparkle enhance: streamed AI rewrites of a single text value with
//! one-level undo.

pub mod driver;
pub mod enhancer;
pub mod field;
pub mod prompt;
pub mod relay;

pub use driver::run_enhancement;
pub use enhancer::{Enhancer, ProviderEnhancer};
pub use field::{EnhanceState, EnhanceTicket, EnhanceableField};
pub use relay::RelayEnhancer;

use crate::config::Config;
use crate::core::providers::OpenAiProvider;
use std::sync::Arc;

/// Completion model used for every enhancement. Not configurable.
pub const ENHANCE_MODEL: &str = "gpt-4o-mini";

/// The relay at `relay` when given, otherwise the hosted model directly.
pub fn build_enhancer(config: &Config, relay: Option<&str>) -> anyhow::Result<Arc<dyn Enhancer>> {
    if let Some(base) = relay {
        let enhancer = RelayEnhancer::new(base, config.provider.timeout_secs)?;
        tracing::debug!(endpoint = enhancer.endpoint(), "enhancing through relay");
        return Ok(Arc::new(enhancer));
    }
    let provider = OpenAiProvider::from_config(config);
    Ok(Arc::new(ProviderEnhancer::new(
        Arc::new(provider),
        config.default_temperature,
    )))
}
