//! Configuration structures for BIG-IP clients.
//!
//! This module provides the device-level configuration used to build a
//! session: management host, credentials, authentication mode, and request
//! timeout. Validation applies to the configuration only; resource payloads
//! are never validated client-side.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::Error;

/// Default token login provider on the device.
pub const DEFAULT_LOGIN_PROVIDER: &str = "tmui";

/// Configuration for a BIG-IP device connection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeviceConfig {
    /// Management URL of the device (e.g. `https://bigip.example.com`)
    #[validate(url)]
    pub host: String,

    /// Administrative user name
    pub username: String,

    /// Administrative password
    #[serde(skip_serializing)]
    pub password: SecretString,

    /// Exchange the credentials for an `X-F5-Auth-Token` instead of
    /// sending basic auth on every request
    #[serde(default)]
    pub token_auth: bool,

    /// Login provider used by the token endpoint
    #[serde(default = "default_login_provider")]
    pub login_provider: String,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub timeout_secs: u64,

    /// Whether to verify the device TLS certificate
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

fn default_login_provider() -> String {
    DEFAULT_LOGIN_PROVIDER.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_tls_verify() -> bool {
    true
}

impl DeviceConfig {
    /// Create a new device configuration with required parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or validation fails.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        let config = Self {
            host: host.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
            token_auth: false,
            login_provider: default_login_provider(),
            timeout_secs: default_request_timeout_secs(),
            tls_verify: default_tls_verify(),
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Use token authentication instead of per-request basic auth.
    #[must_use]
    pub const fn with_token_auth(mut self, enabled: bool) -> Self {
        self.token_auth = enabled;
        self
    }

    /// Set the login provider used by the token endpoint.
    #[must_use]
    pub fn with_login_provider(mut self, provider: impl Into<String>) -> Self {
        self.login_provider = provider.into();
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set whether to verify the device TLS certificate.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse and validate the management URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_host(&self) -> Result<Url, Error> {
        Url::parse(&self.host)
            .map_err(|e| Error::ConfigError(format!("Invalid management URL: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_device_config_new() {
        let config = DeviceConfig::new("https://bigip.example.com", "admin", "secret").unwrap();
        assert_eq!(config.host, "https://bigip.example.com");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password.expose_secret(), "secret");
        assert!(!config.token_auth);
        assert_eq!(config.login_provider, "tmui");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.tls_verify);
    }

    #[test]
    fn test_device_config_invalid_url() {
        let result = DeviceConfig::new("not-a-url", "admin", "secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_device_config_builder() {
        let config = DeviceConfig::new("https://bigip.example.com", "admin", "secret")
            .unwrap()
            .with_token_auth(true)
            .with_login_provider("local")
            .with_timeout(60)
            .with_tls_verify(false);

        assert!(config.token_auth);
        assert_eq!(config.login_provider, "local");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(!config.tls_verify);
    }

    #[test]
    fn test_device_config_parse_host() {
        let config = DeviceConfig::new("https://bigip.example.com:8443", "admin", "x").unwrap();
        let url = config.parse_host().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("bigip.example.com"));
        assert_eq!(url.port(), Some(8443));
    }

    #[test]
    fn test_password_not_serialized() {
        let config = DeviceConfig::new("https://bigip.example.com", "admin", "secret").unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("admin"));
    }

    #[test]
    fn test_device_config_deserialization_defaults() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"host":"https://bigip.example.com","username":"admin","password":"secret"}"#,
        )
        .unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.login_provider, "tmui");
        assert!(config.tls_verify);
        assert!(!config.token_auth);
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = DeviceConfig::new("https://bigip.example.com", "admin", "x").unwrap();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.timeout_secs = 301;
        assert!(config.validate().is_err());

        config.timeout_secs = 30;
        assert!(config.validate().is_ok());
    }
}
