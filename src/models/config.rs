/// Configuration models
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_PUBLIC_KEY, DEFAULT_SERVICE_ID, DEFAULT_TEMPLATE_ID,
};

/// EmailJS account configuration.
///
/// Resolved once when the handler context is built and immutable afterwards.
/// These are public identifiers of the provider account, not secrets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl RelayConfig {
    /// Validates configuration is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.service_id.is_empty() {
            return Err("Service ID not configured".to_string());
        }
        if self.template_id.is_empty() {
            return Err("Template ID not configured".to_string());
        }
        if self.public_key.is_empty() {
            return Err("Public key not configured".to_string());
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(format!("Invalid API URL: {}", self.api_url));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RelayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_url, "https://api.emailjs.com/api/v1.0/email/send");
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let config = RelayConfig {
            service_id: String::new(),
            ..RelayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_url_rejected() {
        let config = RelayConfig {
            api_url: "ftp://api.emailjs.com".to_string(),
            ..RelayConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid API URL"));
    }
}
