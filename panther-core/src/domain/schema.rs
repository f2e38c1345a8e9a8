//! Custom log schema domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};

/// A custom log schema
///
/// Schemas are keyed by name. Deleting one archives it; archived schemas keep
/// their history and stay visible in listings with `is_archived` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
    /// Schema name, e.g. `Custom.Webhook`
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,

    /// Free-form description
    #[serde(deserialize_with = "nullable::deserialize")]
    pub description: String,

    /// YAML schema definition
    #[serde(deserialize_with = "nullable::deserialize")]
    pub spec: String,

    /// Version number, bumped on every spec change
    #[serde(deserialize_with = "nullable::deserialize")]
    pub version: i64,

    /// Revision used for optimistic concurrency on updates
    #[serde(deserialize_with = "nullable::deserialize")]
    pub revision: i64,

    /// Whether the schema has been archived
    #[serde(deserialize_with = "nullable::deserialize")]
    pub is_archived: bool,

    /// Whether the schema is managed by Panther
    #[serde(deserialize_with = "nullable::deserialize")]
    pub is_managed: bool,

    /// Whether new fields are discovered automatically
    #[serde(deserialize_with = "nullable::deserialize")]
    pub is_field_discovery_enabled: bool,

    /// Creation timestamp (RFC 3339)
    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_at: String,

    /// Last update timestamp (RFC 3339)
    #[serde(deserialize_with = "nullable::deserialize")]
    pub updated_at: String,
}

impl Identified for Schema {
    fn id(&self) -> &str {
        &self.name
    }
}
