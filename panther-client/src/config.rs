//! Client configuration
//!
//! Holds the API URL and token plus the transport policy. Values come from
//! explicit construction or from environment variables; either way they are
//! validated before a client is built from them.

use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::transport::RetryPolicy;

/// Environment variable holding the API URL
pub const URL_ENV: &str = "PANTHER_API_URL";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "PANTHER_API_TOKEN";

/// Environment variable overriding the number of retries
pub const MAX_RETRIES_ENV: &str = "PANTHER_MAX_RETRIES";

/// Environment variable overriding the overall deadline, in seconds
pub const TIMEOUT_ENV: &str = "PANTHER_TIMEOUT_SECS";

/// Client configuration
///
/// The custom `Debug` implementation redacts the token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Panther API, with or without the GraphQL suffix
    pub url: String,

    /// API token sent in the `X-API-Key` header
    pub token: String,

    /// Timeout and retry settings for every request
    pub retry: RetryPolicy,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .field("retry", &self.retry)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a new configuration with the default transport policy
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Replaces the transport policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PANTHER_API_URL (required)
    /// - PANTHER_API_TOKEN (required)
    /// - PANTHER_MAX_RETRIES (optional, default: 3)
    /// - PANTHER_TIMEOUT_SECS (optional, default: 10)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from any key/value source
    ///
    /// Optional values that are present but not integers are rejected rather
    /// than replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup(URL_ENV)
            .ok_or_else(|| ClientError::Config(format!("{} environment variable not set", URL_ENV)))?;

        let token = lookup(TOKEN_ENV).ok_or_else(|| {
            ClientError::Config(format!("{} environment variable not set", TOKEN_ENV))
        })?;

        let mut retry = RetryPolicy::default();

        if let Some(max_retries) = parse_integer(&lookup, MAX_RETRIES_ENV)? {
            retry.max_retries = max_retries;
        }

        if let Some(timeout_secs) = parse_integer(&lookup, TIMEOUT_ENV)? {
            retry.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(Self { url, token, retry })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ClientError::Config("Panther API URL must be provided".to_string()));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ClientError::Config(
                "Panther API URL must start with http:// or https://".to_string(),
            ));
        }

        if self.token.is_empty() {
            return Err(ClientError::Config(
                "Panther API token must be provided".to_string(),
            ));
        }

        if self.retry.timeout.is_zero() {
            return Err(ClientError::Config("timeout must be greater than 0".to_string()));
        }

        if self.retry.attempt_timeout.is_zero() {
            return Err(ClientError::Config(
                "attempt_timeout must be greater than 0".to_string(),
            ));
        }

        if self.retry.min_backoff > self.retry.max_backoff {
            return Err(ClientError::Config(
                "min_backoff must not exceed max_backoff".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_integer<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    lookup(key)
        .map(|value| {
            value.trim().parse().map_err(|_| {
                ClientError::Config(format!("{} must be an integer, got {:?}", key, value))
            })
        })
        .transpose()
}
