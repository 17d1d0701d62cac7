/// Configuration service - loads config from environment variables
use crate::error::RelayError;
use crate::models::RelayConfig;

/// Environment variable-based configuration provider.
///
/// Each identifier falls back to the account's default value when the
/// corresponding variable is unset, so a stock deployment needs no
/// environment at all.
pub struct EnvConfigProvider;

impl EnvConfigProvider {
    pub fn load() -> Result<RelayConfig, RelayError> {
        let defaults = RelayConfig::default();

        let config = RelayConfig {
            service_id: env_or("EMAILJS_SERVICE_ID", defaults.service_id),
            template_id: env_or("EMAILJS_TEMPLATE_ID", defaults.template_id),
            public_key: env_or("EMAILJS_PUBLIC_KEY", defaults.public_key),
            api_url: env_or("EMAILJS_API_URL", defaults.api_url),
        };

        config
            .validate()
            .map_err(|e| RelayError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var manipulation is process-global, so these tests only exercise
    // keys no other test touches.

    #[test]
    fn test_defaults_when_env_unset() {
        unsafe {
            std::env::remove_var("EMAILJS_SERVICE_ID");
            std::env::remove_var("EMAILJS_TEMPLATE_ID");
            std::env::remove_var("EMAILJS_PUBLIC_KEY");
            std::env::remove_var("EMAILJS_API_URL");
        }

        let config = EnvConfigProvider::load().unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn test_env_or_ignores_empty_values() {
        unsafe {
            std::env::set_var("VERIMAIL_TEST_EMPTY", "");
        }
        assert_eq!(
            env_or("VERIMAIL_TEST_EMPTY", "fallback".to_string()),
            "fallback"
        );
        assert_eq!(
            env_or("VERIMAIL_TEST_UNSET", "fallback".to_string()),
            "fallback"
        );
    }
}
