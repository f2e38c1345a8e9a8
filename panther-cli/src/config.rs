//! Configuration module
//!
//! Turns the global command-line flags into client configuration.

use std::time::Duration;

use panther_client::{ClientConfig, RetryPolicy};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Panther API URL, either the API root or the GraphQL endpoint
    pub url: String,
    /// API token
    pub token: String,
    /// Overrides the default number of retries
    pub max_retries: Option<u32>,
    /// Overrides the default deadline per call, in seconds
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Client configuration with the CLI overrides applied
    pub fn client_config(&self) -> ClientConfig {
        let mut retry = RetryPolicy::default();
        if let Some(max_retries) = self.max_retries {
            retry.max_retries = max_retries;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            retry.timeout = Duration::from_secs(timeout_secs);
        }

        ClientConfig::new(self.url.clone(), self.token.clone()).with_retry(retry)
    }
}
