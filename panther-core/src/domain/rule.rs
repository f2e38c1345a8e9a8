//! Streaming rule domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};
use super::severity::Severity;

/// A Python detection rule evaluated against streaming logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    /// Rule identifier
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    /// Name shown in the console
    #[serde(deserialize_with = "nullable::deserialize")]
    pub display_name: String,

    /// Python source of the rule
    #[serde(deserialize_with = "nullable::deserialize")]
    pub body: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub description: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub severity: Severity,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub enabled: bool,

    /// Window in which matching events are grouped into one alert
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dedup_period_minutes: i64,

    /// Triage instructions attached to alerts
    #[serde(deserialize_with = "nullable::deserialize")]
    pub runbook: String,

    /// Log types the rule runs against
    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_types: Vec<String>,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub tags: Vec<String>,

    /// Creation timestamp (RFC 3339)
    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_at: String,

    /// Last modification timestamp (RFC 3339)
    #[serde(
        rename = "lastModified",
        alias = "updatedAt",
        deserialize_with = "nullable::deserialize"
    )]
    pub updated_at: String,
}

impl Identified for Rule {
    fn id(&self) -> &str {
        &self.id
    }
}
