//! Axum-based HTTP gateway hosting the enhance relay, action declarations and
//! per-client assistant sessions.
//!
//! - Request body size limit (64KB max)
//! - Request timeout (30s) on every route except the streaming relay
//! - Optional CORS for browser clients

mod actions;
mod enhance;
mod error;
mod handlers;
mod server;
mod wizard;

pub use enhance::EnhanceBody;
pub use error::ApiError;
pub use server::{build_app, is_public_bind, run_gateway, run_gateway_with_listener};

use crate::config::Config;
use crate::core::enhance::ProviderEnhancer;
use crate::core::session::SessionStore;
use std::sync::Arc;
use std::time::Duration;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s) -- prevents slow-loris attacks
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub enhancer: Arc<ProviderEnhancer>,
    pub sessions: Arc<SessionStore>,
    pub submit_delay: Duration,
}

impl AppState {
    pub fn new(enhancer: ProviderEnhancer, submit_delay: Duration) -> Self {
        Self {
            enhancer: Arc::new(enhancer),
            sessions: Arc::new(SessionStore::new()),
            submit_delay,
        }
    }

    /// State backed by the hosted provider named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let provider = crate::core::providers::OpenAiProvider::from_config(config);
        Self::new(
            ProviderEnhancer::new(Arc::new(provider), config.default_temperature),
            config.wizard.submit_delay(),
        )
    }
}

#[cfg(test)]
mod tests;
