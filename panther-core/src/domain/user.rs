//! User domain model

use serde::{Deserialize, Serialize};

use super::{Identified, nullable};

/// A console user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub email: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub given_name: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub family_name: String,

    /// Role assigned to the user
    #[serde(deserialize_with = "nullable::deserialize")]
    pub role: UserRole,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub enabled: bool,

    /// Account status, e.g. `FORCE_CHANGE_PASSWORD` or `CONFIRMED`
    #[serde(deserialize_with = "nullable::deserialize")]
    pub status: String,

    #[serde(deserialize_with = "nullable::deserialize")]
    pub created_at: String,

    /// Empty until the user first signs in
    #[serde(deserialize_with = "nullable::deserialize")]
    pub last_logged_in_at: String,
}

/// Role reference as returned on a user record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRole {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}
