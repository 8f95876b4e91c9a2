use super::super::{GatewayConfig, ObservabilityConfig, ProviderConfig, WizardConfig};
use crate::error::ConfigError;
use crate::transport::gateway::REQUEST_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Key for the hosted completion provider
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub wizard: WizardConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            default_temperature: default_temperature(),
            provider: ProviderConfig::default(),
            gateway: GatewayConfig::default(),
            wizard: WizardConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Trimmed API key, `None` when unset or blank.
    pub fn resolved_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.default_temperature) {
            return Err(ConfigError::Validation(format!(
                "default_temperature must be within 0.0..=2.0 (got {})",
                self.default_temperature
            )));
        }
        url::Url::parse(&self.provider.base_url).map_err(|error| {
            ConfigError::Validation(format!(
                "provider.base_url '{}' is not a valid URL: {error}",
                self.provider.base_url
            ))
        })?;
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "provider.timeout_secs must be positive".into(),
            ));
        }
        // HTTP submits wait out the delay inside the request.
        let submit_budget_ms = REQUEST_TIMEOUT_SECS * 1000;
        if self.wizard.submit_delay_ms >= submit_budget_ms {
            return Err(ConfigError::Validation(format!(
                "wizard.submit_delay_ms must be below {submit_budget_ms} (got {})",
                self.wizard.submit_delay_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.api_key.is_none());
        assert!((config.default_temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.gateway.port, 3000);
        assert_eq!(config.wizard.submit_delay_ms, 2000);
    }

    #[test]
    fn blank_api_key_resolves_to_none() {
        let config = Config {
            api_key: Some("   ".into()),
            ..Config::default()
        };
        assert!(config.resolved_api_key().is_none());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = Config {
            default_temperature: 3.5,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_temperature"));
    }

    #[test]
    fn rejects_unparseable_provider_url() {
        let mut config = Config::default();
        config.provider.base_url = "not a url".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn submit_delay_must_fit_the_request_timeout() {
        let mut config = Config::default();
        config.wizard.submit_delay_ms = 29_999;
        assert!(config.validate().is_ok());

        config.wizard.submit_delay_ms = 30_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("wizard.submit_delay_ms must be below 30000"));

        let config: Config = toml::from_str("[wizard]\nsubmit_delay_ms = 45000\n").unwrap();
        assert!(config.validate().is_err());
    }
}
