//! HTTP log source domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};

/// An HTTP endpoint that accepts pushed logs
///
/// Secret attributes (`auth_password`, `auth_secret_value`,
/// `auth_bearer_token`) come back from the server as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpSource {
    /// ID of the log source integration
    #[serde(deserialize_with = "nullable::deserialize")]
    pub integration_id: String,

    /// Display name of the integration
    #[serde(deserialize_with = "nullable::deserialize")]
    pub integration_label: String,

    /// Format of the pushed payloads (Auto, JSON, JsonArray, Lines, CloudWatchLogs)
    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_stream_type: String,

    /// Log types the payloads are parsed as
    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_types: Vec<String>,

    /// Authentication method (SharedSecret, HMAC, Bearer, Basic, None)
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_method: String,

    /// HMAC algorithm, when `auth_method` is HMAC
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_hmac_alg: String,

    /// Header carrying the credential
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_header_key: String,

    /// Basic auth password
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_password: String,

    /// Shared secret or HMAC key
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_secret_value: String,

    /// Basic auth user name
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_username: String,

    /// Bearer token
    #[serde(deserialize_with = "nullable::deserialize")]
    pub auth_bearer_token: String,
}

impl Identified for HttpSource {
    fn id(&self) -> &str {
        &self.integration_id
    }
}
