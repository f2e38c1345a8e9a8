//! Authorized HTTP transport
//!
//! Every request to the Panther API goes through [`AuthorizedTransport`]. It
//! attaches the API key, bounds the whole call by a deadline, retries failures
//! that never produced a response, and gives up as soon as the caller cancels.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, Method, Request, Response};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Header carrying the API token
pub const API_KEY_HEADER: &str = "x-api-key";

/// Executes a prepared HTTP request
///
/// Implemented by `reqwest::Client` in production. Tests substitute doubles
/// that record requests or fail on demand.
#[async_trait]
pub trait Doer: Send + Sync {
    /// Send the request and wait for the response head
    async fn execute(&self, request: Request) -> std::result::Result<Response, reqwest::Error>;
}

#[async_trait]
impl Doer for Client {
    async fn execute(&self, request: Request) -> std::result::Result<Response, reqwest::Error> {
        Client::execute(self, request).await
    }
}

/// Timeout and retry settings for a single API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Wait before the first retry
    pub min_backoff: Duration,
    /// Upper bound for the wait between retries
    pub max_backoff: Duration,
    /// Deadline for a single attempt; a stalled attempt is retried
    pub attempt_timeout: Duration,
    /// Deadline for the whole call, retries included
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            min_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(2),
            attempt_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// A policy that sends every request exactly once
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Wait before the given retry (1-based), doubling up to `max_backoff`
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.min_backoff
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }
}

/// Transport that authenticates, retries, and bounds every request
#[derive(Clone)]
pub struct AuthorizedTransport {
    doer: Arc<dyn Doer>,
    api_key: HeaderValue,
    policy: RetryPolicy,
}

impl std::fmt::Debug for AuthorizedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizedTransport")
            .field("api_key", &"[REDACTED]")
            .field("policy", &self.policy)
            .finish()
    }
}

impl AuthorizedTransport {
    /// Wrap a doer so that every request carries the given API token
    pub fn new(doer: Arc<dyn Doer>, token: &str, policy: RetryPolicy) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(token)
            .map_err(|_| ClientError::Config("API token is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        Ok(Self {
            doer,
            api_key,
            policy,
        })
    }

    /// The timeout and retry settings in use
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Start building a request; `send` adds the credentials
    pub fn request(&self, method: Method, url: &str) -> Result<Request> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid URL {}: {}", url, e)))?;
        Ok(Request::new(method, url))
    }

    /// Send a request and return the first HTTP response
    ///
    /// Any response is returned as is, whatever its status. Failures that
    /// produced no response, including an attempt that outlives
    /// `attempt_timeout`, are retried with backoff, provided the request body
    /// can be cloned. The overall deadline covers all attempts.
    pub async fn send(&self, request: Request, cancel: &CancellationToken) -> Result<Response> {
        let timeout = self.policy.timeout;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            outcome = tokio::time::timeout(timeout, self.send_with_retry(request)) => {
                outcome.unwrap_or(Err(ClientError::Timeout(timeout)))
            }
        }
    }

    async fn send_with_retry(&self, mut request: Request) -> Result<Response> {
        request
            .headers_mut()
            .insert(API_KEY_HEADER, self.api_key.clone());

        let method = request.method().clone();
        let url = request.url().clone();
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            // A request without a clonable body gets a single attempt.
            let retry_copy = if attempt <= self.policy.max_retries {
                request.try_clone()
            } else {
                None
            };

            debug!(method = %method, url = %url, attempt, "Sending request");

            let attempt_timeout = self.policy.attempt_timeout;
            let error = match tokio::time::timeout(attempt_timeout, self.doer.execute(request)).await
            {
                Ok(Ok(response)) => {
                    debug!(
                        method = %method,
                        url = %url,
                        status = response.status().as_u16(),
                        attempt,
                        "Received response"
                    );
                    return Ok(response);
                }
                Ok(Err(e)) if is_transient(&e) => ClientError::RequestFailed(e),
                Ok(Err(e)) => {
                    debug!(method = %method, url = %url, attempt, error = %e, "Request failed");
                    return Err(ClientError::RequestFailed(e));
                }
                Err(_) => ClientError::Timeout(attempt_timeout),
            };

            let Some(copy) = retry_copy else {
                debug!(method = %method, url = %url, attempt, error = %error, "Request failed");
                return Err(error);
            };

            let delay = self.policy.backoff(attempt);
            warn!(
                method = %method,
                url = %url,
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Request failed, retrying"
            );
            tokio::time::sleep(delay).await;
            request = copy;
        }
    }
}

/// Failures where the server never produced a response
fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_request()
}

/// Read a full response body, giving up when the caller cancels
pub async fn read_body(response: Response, cancel: &CancellationToken) -> Result<Vec<u8>> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ClientError::Cancelled),
        body = response.bytes() => Ok(body?.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every request and answers 200
    #[derive(Default)]
    struct RecordingDoer {
        seen: Mutex<Vec<Request>>,
    }

    #[async_trait]
    impl Doer for RecordingDoer {
        async fn execute(&self, request: Request) -> std::result::Result<Response, reqwest::Error> {
            self.seen.lock().unwrap().push(request);
            let response = http::Response::builder()
                .status(200)
                .body("{}")
                .unwrap();
            Ok(Response::from(response))
        }
    }

    /// Fails with a real connection error a fixed number of times, then answers 204
    struct FlakyDoer {
        failures: usize,
        calls: AtomicUsize,
        client: Client,
    }

    impl FlakyDoer {
        fn new(failures: usize) -> Self {
            Self {
                failures,
                calls: AtomicUsize::new(0),
                client: Client::new(),
            }
        }
    }

    #[async_trait]
    impl Doer for FlakyDoer {
        async fn execute(&self, request: Request) -> std::result::Result<Response, reqwest::Error> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                // Nothing listens on port 1, so this fails to connect.
                return self.client.get("http://127.0.0.1:1/").send().await;
            }
            drop(request);
            let response = http::Response::builder().status(204).body("").unwrap();
            Ok(Response::from(response))
        }
    }

    /// Never answers
    #[derive(Default)]
    struct PendingDoer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Doer for PendingDoer {
        async fn execute(&self, _request: Request) -> std::result::Result<Response, reqwest::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    fn fast_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            min_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(2),
            attempt_timeout: Duration::from_secs(1),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_backoff_doubles_up_to_max() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(1), Duration::from_millis(500));
        assert_eq!(policy.backoff(2), Duration::from_secs(1));
        assert_eq!(policy.backoff(3), Duration::from_secs(2));
        assert_eq!(policy.backoff(10), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let doer: Arc<dyn Doer> = Arc::new(RecordingDoer::default());
        let result = AuthorizedTransport::new(doer, "bad\ntoken", RetryPolicy::default());
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[tokio::test]
    async fn test_api_key_on_every_request() {
        let doer = Arc::new(RecordingDoer::default());
        let transport =
            AuthorizedTransport::new(doer.clone(), "secret-token", RetryPolicy::default()).unwrap();
        let cancel = CancellationToken::new();

        for method in [Method::GET, Method::POST, Method::DELETE] {
            let request = transport
                .request(method, "https://api.example.com/v1/rules")
                .unwrap();
            transport.send(request, &cancel).await.unwrap();
        }

        let seen = doer.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        for request in seen.iter() {
            let value = request.headers().get(API_KEY_HEADER).unwrap();
            assert_eq!(value.to_str().unwrap(), "secret-token");
            assert!(value.is_sensitive());
        }
    }

    #[tokio::test]
    async fn test_connect_errors_are_retried() {
        let doer = Arc::new(FlakyDoer::new(2));
        let transport = AuthorizedTransport::new(doer.clone(), "token", fast_policy(3)).unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();

        let response = transport
            .send(request, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 204);
        assert_eq!(doer.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retries_are_exhausted() {
        let doer = Arc::new(FlakyDoer::new(10));
        let transport = AuthorizedTransport::new(doer.clone(), "token", fast_policy(2)).unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();

        let result = transport.send(request, &CancellationToken::new()).await;

        assert!(matches!(result, Err(ClientError::RequestFailed(_))));
        assert_eq!(doer.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cancellation_stops_request() {
        let transport =
            AuthorizedTransport::new(Arc::new(PendingDoer::default()), "token", RetryPolicy::default())
                .unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = transport.send(request, &cancel).await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }

    #[tokio::test]
    async fn test_already_cancelled_never_sends() {
        let doer = Arc::new(RecordingDoer::default());
        let transport =
            AuthorizedTransport::new(doer.clone(), "token", RetryPolicy::default()).unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = transport.send(request, &cancel).await;

        assert!(matches!(result, Err(ClientError::Cancelled)));
        assert!(doer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overall_deadline() {
        let policy = RetryPolicy {
            timeout: Duration::from_millis(50),
            ..RetryPolicy::default()
        };
        let transport = AuthorizedTransport::new(Arc::new(PendingDoer::default()), "token", policy).unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();

        let result = transport.send(request, &CancellationToken::new()).await;
        assert!(matches!(result, Err(ClientError::Timeout(d)) if d == Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_stalled_attempts_are_retried() {
        let doer = Arc::new(PendingDoer::default());
        let policy = RetryPolicy {
            attempt_timeout: Duration::from_millis(20),
            ..fast_policy(2)
        };
        let transport = AuthorizedTransport::new(doer.clone(), "token", policy).unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();

        let result = transport.send(request, &CancellationToken::new()).await;

        assert!(matches!(result, Err(ClientError::Timeout(d)) if d == Duration::from_millis(20)));
        assert_eq!(doer.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stalled_attempt_without_retries() {
        let doer = Arc::new(PendingDoer::default());
        let policy = RetryPolicy {
            attempt_timeout: Duration::from_millis(20),
            ..fast_policy(0)
        };
        let transport = AuthorizedTransport::new(doer.clone(), "token", policy).unwrap();
        let request = transport
            .request(Method::GET, "https://api.example.com/v1/rules/r-1")
            .unwrap();

        let result = transport.send(request, &CancellationToken::new()).await;

        assert!(matches!(result, Err(ClientError::Timeout(_))));
        assert_eq!(doer.calls.load(Ordering::SeqCst), 1);
    }
}
