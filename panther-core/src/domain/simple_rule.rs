//! Simple (YAML) detection domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};
use super::severity::Severity;

/// A rule written in the YAML detection language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleRule {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub display_name: String,

    /// YAML match expression
    #[serde(deserialize_with = "nullable::deserialize")]
    pub detection: String,

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

    #[serde(deserialize_with = "nullable::deserialize")]
    pub threshold: i64,

    /// YAML alert context definition
    #[serde(deserialize_with = "nullable::deserialize")]
    pub alert_context: String,

    /// Template for the alert title
    #[serde(deserialize_with = "nullable::deserialize")]
    pub alert_title: String,

    /// YAML rules that raise or lower severity per event
    #[serde(deserialize_with = "nullable::deserialize")]
    pub dynamic_severities: String,

    /// YAML grouping key definition
    #[serde(deserialize_with = "nullable::deserialize")]
    pub group_by: String,

    /// Filters applied before the detection runs
    #[serde(deserialize_with = "nullable::deserialize")]
    pub inline_filters: String,

    /// Python translation generated by the server
    #[serde(deserialize_with = "nullable::deserialize")]
    pub python_body: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_types: Vec<String>,

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

impl Identified for SimpleRule {
    fn id(&self) -> &str {
        &self.id
    }
}
