//! Role DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModifiableAttributes {
    pub name: String,
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_type_access_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_type_access: Vec<String>,
}

/// Body of `POST /roles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleInput {
    #[serde(flatten)]
    pub attributes: RoleModifiableAttributes,
}

/// Body of `PUT /roles/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: RoleModifiableAttributes,
}

impl Identified for UpdateRoleInput {
    fn id(&self) -> &str {
        &self.id
    }
}
