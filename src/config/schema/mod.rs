mod core;
mod gateway;
mod observability;
mod provider;
mod wizard;

pub use core::Config;
pub use gateway::GatewayConfig;
pub use observability::ObservabilityConfig;
pub use provider::ProviderConfig;
pub use wizard::WizardConfig;
