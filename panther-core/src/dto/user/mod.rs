//! User DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;

/// Reference to the role a user should hold, by id or by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModifiableAttributes {
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub role: UserRoleRef,
}

/// Body of `POST /users` (sends an invitation)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    #[serde(flatten)]
    pub attributes: UserModifiableAttributes,
}

/// Body of `PUT /users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: UserModifiableAttributes,
}

impl Identified for UpdateUserInput {
    fn id(&self) -> &str {
        &self.id
    }
}
