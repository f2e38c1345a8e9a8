//! Policy DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::severity::Severity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyModifiableAttributes {
    pub display_name: String,
    pub body: String,
    pub description: String,
    pub severity: Severity,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Body of `POST /policies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: PolicyModifiableAttributes,
}

/// Body of `PUT /policies/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: PolicyModifiableAttributes,
}

impl Identified for UpdatePolicyInput {
    fn id(&self) -> &str {
        &self.id
    }
}
