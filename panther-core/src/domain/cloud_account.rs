//! Cloud account domain model
//!
//! Cloud accounts are AWS accounts registered for cloud security scanning,
//! managed through the GraphQL API.

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};

/// An AWS account registered for scanning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudAccount {
    /// Server-assigned identifier
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    /// The 12-digit AWS account ID
    #[serde(deserialize_with = "nullable::deserialize")]
    pub aws_account_id: String,

    /// Display name
    #[serde(deserialize_with = "nullable::deserialize")]
    pub label: String,

    /// CloudFormation stack that provisioned the audit role
    #[serde(deserialize_with = "nullable::deserialize")]
    pub aws_stack_name: String,

    /// Scan settings
    #[serde(deserialize_with = "nullable::deserialize")]
    pub aws_scan_config: AwsScanConfig,

    /// Regions excluded from scanning
    #[serde(deserialize_with = "nullable::deserialize")]
    pub aws_region_ignore_list: Vec<String>,

    /// Resource name patterns excluded from scanning
    #[serde(deserialize_with = "nullable::deserialize")]
    pub resource_regex_ignore_list: Vec<String>,

    /// Resource types excluded from scanning
    #[serde(deserialize_with = "nullable::deserialize")]
    pub resource_type_ignore_list: Vec<String>,
}

/// Scan settings of a cloud account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsScanConfig {
    /// ARN of the IAM role used for auditing
    #[serde(deserialize_with = "nullable::deserialize")]
    pub audit_role: String,
}

impl Identified for CloudAccount {
    fn id(&self) -> &str {
        &self.id
    }
}
