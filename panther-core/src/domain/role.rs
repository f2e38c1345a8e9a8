//! Role domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};

/// A named set of console permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,

    /// Permission identifiers, e.g. `RuleRead`
    #[serde(deserialize_with = "nullable::deserialize")]
    pub permissions: Vec<String>,

    /// How `log_type_access` is interpreted (ALLOW, ALLOW_ALL, DENY, DENY_ALL)
    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_type_access_kind: String,

    /// Log types the role is allowed or denied
    #[serde(deserialize_with = "nullable::deserialize")]
    pub log_type_access: Vec<String>,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_at: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub updated_at: String,
}

impl Identified for Role {
    fn id(&self) -> &str {
        &self.id
    }
}
