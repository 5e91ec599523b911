//! Client configuration

use crate::{ClientError, ClientResult};

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "BACKOFFICE_API_URL";
/// Environment variable holding the bearer token
pub const ENV_API_TOKEN: &str = "BACKOFFICE_API_TOKEN";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "BACKOFFICE_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the remote catalog API
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BACKOFFICE_API_URL | http://localhost:8000 | API base URL |
/// | BACKOFFICE_API_TOKEN | (none) | Bearer token |
/// | BACKOFFICE_TIMEOUT_SECS | 30 | Request timeout |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from the environment, reading `.env` first if present.
    ///
    /// Unset variables fall back to their defaults; a timeout that is not a
    /// positive integer is a configuration error.
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let mut config = Self::new(base_url);
        config.token = lookup(ENV_API_TOKEN).filter(|t| !t.is_empty());

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ClientError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        ENV_TIMEOUT_SECS, raw
                    ))
                })?;
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_values_from_env() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://admin.example.com/"),
            (ENV_API_TOKEN, "secret"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://admin.example.com/");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_bad_timeout() {
        for raw in ["soon", "0", "-3"] {
            let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, raw)])).unwrap_err();
            assert!(matches!(err, ClientError::Config(_)));
            assert_eq!(err.code(), Some(shared::error::ErrorCode::ConfigError));
        }
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://api").with_token("t").with_timeout(3);
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout, 3);
    }
}
