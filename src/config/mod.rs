pub mod schema;

pub use schema::{Config, GatewayConfig, ObservabilityConfig, ProviderConfig, WizardConfig};
