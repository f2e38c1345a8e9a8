//! Cloud security policy domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};
use super::severity::Severity;

/// A Python policy evaluated against cloud resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub display_name: String,

    /// Python source of the policy
    #[serde(deserialize_with = "nullable::deserialize")]
    pub body: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub description: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub severity: Severity,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub enabled: bool,

    /// Resource types the policy applies to, e.g. `AWS.S3.Bucket`
    #[serde(deserialize_with = "nullable::deserialize")]
    pub resource_types: Vec<String>,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub tags: Vec<String>,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_at: String,

    #[serde(
        rename = "lastModified",
        alias = "updatedAt",
        deserialize_with = "nullable::deserialize"
    )]
    pub updated_at: String,
}

impl Identified for Policy {
    fn id(&self) -> &str {
        &self.id
    }
}
