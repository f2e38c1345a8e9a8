//! Error envelope returned by REST endpoints

use serde::{Deserialize, Serialize};

/// Body of any non-success REST response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable explanation supplied by the server
    pub message: String,
}
