//! Schema DTOs
//!
//! Create and update both go through the `createOrUpdateSchema` mutation; an
//! update differs only by carrying the revision it was computed against.

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::schema::Schema;

/// Attributes shared by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaModifiableAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// YAML schema definition
    pub spec: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_field_discovery_enabled: Option<bool>,
}

/// Input for creating a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchemaInput {
    pub name: String,
    #[serde(flatten)]
    pub attributes: SchemaModifiableAttributes,
}

/// Input for updating a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchemaInput {
    pub name: String,
    #[serde(flatten)]
    pub attributes: SchemaModifiableAttributes,

    /// Revision the update was based on; the server rejects stale revisions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
}

/// Payload of `createOrUpdateSchema`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOutput {
    pub schema: Schema,
}

/// Input for archiving a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSchemaInput {
    pub name: String,
}

/// Result of archiving a schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSchemaOutput {
    pub name: String,
    pub is_archived: bool,
}

/// One page of the `schemas` listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaPage {
    pub schemas: Vec<Schema>,

    /// Cursor of the next page, `None` on the last page
    pub next_cursor: Option<String>,
}

impl Identified for UpdateSchemaInput {
    fn id(&self) -> &str {
        &self.name
    }
}
