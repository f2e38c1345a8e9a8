//! Scheduled rule domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};
use super::severity::Severity;

/// A rule evaluated against the results of scheduled queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledRule {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub display_name: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub body: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub description: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub severity: Severity,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub enabled: bool,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub dedup_period_minutes: i64,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub runbook: String,

    /// Number of matches required before an alert is raised
    #[serde(deserialize_with = "nullable::deserialize")]
    pub threshold: i64,

    /// Names of the scheduled queries feeding the rule
    #[serde(deserialize_with = "nullable::deserialize")]
    pub scheduled_queries: Vec<String>,

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

impl Identified for ScheduledRule {
    fn id(&self) -> &str {
        &self.id
    }
}
