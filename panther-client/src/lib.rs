//! Panther API client
//!
//! A typed client for the Panther management API. Log sources, cloud accounts
//! and schemas are served by a GraphQL endpoint; detections, users and roles
//! by REST endpoints. Both halves share one authorized transport that adds the
//! API key, retries connection failures, and honours cancellation.
//!
//! # Example
//!
//! ```no_run
//! use panther_client::{ClientConfig, PantherClient};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new("https://api.example.runpanther.net/v1", "token");
//!     let client = PantherClient::new(&config)?;
//!
//!     let cancel = CancellationToken::new();
//!     let rule = client.rest().get_rule(&cancel, "AWS.Console.Login").await?;
//!
//!     println!("Rule {} is enabled: {}", rule.id, rule.enabled);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod rest;
pub mod transport;
pub mod url;

use std::sync::Arc;

// Re-export commonly used types
pub use api::PantherApi;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use graphql::GraphQlClient;
pub use rest::{RestClient, RestFamily};
pub use transport::{AuthorizedTransport, Doer, RetryPolicy};
pub use url::Endpoints;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("panther-client/", env!("CARGO_PKG_VERSION"));

/// Client for the whole Panther API
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PantherClient {
    endpoints: Endpoints,
    graphql: GraphQlClient,
    rest: RestClient,
}

impl PantherClient {
    /// Create a client from validated configuration
    ///
    /// # Example
    /// ```
    /// use panther_client::{ClientConfig, PantherClient};
    ///
    /// let config = ClientConfig::new("https://api.example.com/v1/public/graphql", "token");
    /// let client = PantherClient::new(&config).unwrap();
    /// assert_eq!(client.endpoints().rest, "https://api.example.com/v1");
    /// ```
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.retry.attempt_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Self::with_doer(config, Arc::new(http))
    }

    /// Create a client that sends its requests through the given doer
    ///
    /// This allows tests to record or fail requests, and callers to supply a
    /// `reqwest::Client` with their own proxy or TLS settings.
    pub fn with_doer(config: &ClientConfig, doer: Arc<dyn Doer>) -> Result<Self> {
        config.validate()?;

        let endpoints = Endpoints::from_base_url(&config.url);
        reqwest::Url::parse(&endpoints.graphql).map_err(|e| {
            ClientError::Config(format!("invalid Panther API URL {}: {}", config.url, e))
        })?;

        let transport = AuthorizedTransport::new(doer, &config.token, config.retry)?;

        Ok(Self {
            graphql: GraphQlClient::new(transport.clone(), endpoints.graphql.clone()),
            rest: RestClient::new(transport, endpoints.rest.clone()),
            endpoints,
        })
    }

    /// The endpoints derived from the configured URL
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Operations served by the GraphQL endpoint
    pub fn graphql(&self) -> &GraphQlClient {
        &self.graphql
    }

    /// Operations served by the REST endpoints
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }
}
