use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("SPARKFORM_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
            && !key.trim().is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(base_url) = std::env::var("SPARKFORM_PROVIDER_URL")
            && !base_url.is_empty()
        {
            self.provider.base_url = base_url;
        }

        if let Ok(port_str) =
            std::env::var("SPARKFORM_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) =
            std::env::var("SPARKFORM_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(temp_str) = std::env::var("SPARKFORM_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.default_temperature = temp;
        }

        if let Ok(level) = std::env::var("SPARKFORM_LOG")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_env::{ENV_LOCK, EnvVarGuard};
    use super::*;

    #[test]
    fn sparkform_key_wins_over_openai_key() {
        let _lock = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _primary = EnvVarGuard::set("SPARKFORM_API_KEY", "sk-primary");
        let _fallback = EnvVarGuard::set("OPENAI_API_KEY", "sk-fallback");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("sk-primary"));
    }

    #[test]
    fn openai_key_used_when_primary_unset() {
        let _lock = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _primary = EnvVarGuard::unset("SPARKFORM_API_KEY");
        let _fallback = EnvVarGuard::set("OPENAI_API_KEY", "sk-fallback");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("sk-fallback"));
    }

    #[test]
    fn invalid_port_and_temperature_are_ignored() {
        let _lock = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _port = EnvVarGuard::set("SPARKFORM_GATEWAY_PORT", "not-a-port");
        let _temp = EnvVarGuard::set("SPARKFORM_TEMPERATURE", "9.0");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.gateway.port, 3000);
        assert!((config.default_temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn host_and_log_level_override() {
        let _lock = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _host = EnvVarGuard::set("SPARKFORM_GATEWAY_HOST", "0.0.0.0");
        let _log = EnvVarGuard::set("SPARKFORM_LOG", "debug");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.gateway.host, "0.0.0.0");
        assert_eq!(config.observability.log_level, "debug");
    }
}
