//! S3 log source domain model
//!
//! S3 sources are managed through the GraphQL API.

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};

/// An S3 bucket onboarded as a log source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3LogIntegration {
    /// ID of the AWS account that owns the bucket
    #[serde(deserialize_with = "nullable::deserialize")]
    pub aws_account_id: String,

    /// ID of the log source integration
    #[serde(deserialize_with = "nullable::deserialize")]
    pub integration_id: String,

    /// Display name of the integration
    #[serde(deserialize_with = "nullable::deserialize")]
    pub integration_label: String,

    /// Integration kind reported by the server (e.g. "aws-s3")
    #[serde(deserialize_with = "nullable::deserialize")]
    pub integration_type: String,

    /// Whether the source can be modified
    #[serde(deserialize_with = "nullable::deserialize")]
    pub is_editable: bool,

    /// KMS key used to decrypt objects in the bucket
    #[serde(deserialize_with = "nullable::deserialize")]
    pub kms_key: String,

    /// IAM role assumed to read the bucket
    pub log_processing_role: Option<String>,

    /// Format of the ingested files
    pub log_stream_type: Option<String>,

    /// Whether bucket notifications are managed by Panther
    #[serde(deserialize_with = "nullable::deserialize")]
    pub managed_bucket_notifications: bool,

    /// Name of the ingested bucket
    #[serde(deserialize_with = "nullable::deserialize")]
    pub s3_bucket: String,

    /// Prefix within the bucket
    pub s3_prefix: Option<String>,

    /// Prefix to log type mappings
    #[serde(deserialize_with = "nullable::deserialize")]
    pub s3_prefix_log_types: Vec<S3PrefixLogTypes>,
}

/// Mapping of one S3 prefix to the log types parsed under it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3PrefixLogTypes {
    /// Prefixes excluded from ingestion
    #[serde(deserialize_with = "nullable::deserialize")]
    pub excluded_prefixes: Vec<String>,

    /// Log types parsed under the prefix
    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_types: Vec<String>,

    /// The prefix itself
    #[serde(deserialize_with = "nullable::deserialize")]
    pub prefix: String,
}

impl Identified for S3LogIntegration {
    fn id(&self) -> &str {
        &self.integration_id
    }
}
