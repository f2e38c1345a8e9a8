//! Error types for the Panther client

use std::time::Duration;

use panther_core::domain::error::ErrorResponse;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Panther client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client configuration is unusable (bad URL, missing token)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP request failed at the transport level, after any retries
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The overall deadline for the call elapsed
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The caller cancelled the call
    #[error("Request cancelled")]
    Cancelled,

    /// API returned a status code other than the one the operation expects
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Message decoded from the error envelope
        message: String,
    },

    /// GraphQL endpoint answered with an `errors` array
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Failed to encode the request body
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A failure tagged with the operation it happened in
    #[error("{operation} failed: {error}")]
    Operation {
        /// Operation name, e.g. "create rule"
        operation: String,
        /// What went wrong
        error: Box<ClientError>,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Tag this error with the operation that produced it
    ///
    /// Already tagged errors are returned unchanged so messages never repeat
    /// the operation name.
    pub fn in_operation(self, operation: impl Into<String>) -> Self {
        match self {
            Self::Operation { .. } => self,
            error => Self::Operation {
                operation: operation.into(),
                error: Box::new(error),
            },
        }
    }

    /// The underlying error, without the operation tag
    pub fn root_cause(&self) -> &ClientError {
        match self {
            Self::Operation { error, .. } => error.root_cause(),
            other => other,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self.root_cause() {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), Self::NotFound(_)) || self.status() == Some(404)
    }

    /// Check if the caller cancelled the call
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), Self::Cancelled)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// Extension for tagging results with an operation name
pub(crate) trait OperationExt<T> {
    fn in_operation(self, operation: impl Into<String>) -> Result<T>;
}

impl<T> OperationExt<T> for Result<T> {
    fn in_operation(self, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.in_operation(operation))
    }
}

/// Decode the message of an error response body
///
/// Never fails: if the body is not a valid error envelope the returned
/// message describes the decode failure instead.
pub fn decode_error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(envelope) => envelope.message,
        Err(e) => format!("failed to decode error response: {}", e),
    }
}
