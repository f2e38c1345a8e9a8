//! Custom log schema operations
//!
//! Schemas are keyed by name. There is no lookup-by-name query, so
//! [`GraphQlClient::get_schema`] walks the paginated listing until it finds a
//! match. Schemas cannot be removed, only archived.

use std::collections::HashSet;

use panther_core::domain::nullable;
use panther_core::domain::schema::Schema;
use panther_core::dto::schema::{
    CreateSchemaInput, DeleteSchemaInput, DeleteSchemaOutput, SchemaOutput, SchemaPage,
    UpdateSchemaInput,
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{GraphQlClient, InputVariables, Operation, required};
use crate::error::Result;

macro_rules! schema_fields {
    () => {
        "name description spec version revision isArchived isManaged \
         isFieldDiscoveryEnabled createdAt updatedAt"
    };
}

macro_rules! create_or_update_schema {
    ($label:literal) => {
        Operation {
            name: "CreateOrUpdateSchema",
            label: $label,
            query: concat!(
                "mutation CreateOrUpdateSchema($input: CreateOrUpdateSchemaInput!) { ",
                "createOrUpdateSchema(input: $input) { schema { ",
                schema_fields!(),
                " } } }"
            ),
            field: "createOrUpdateSchema",
        }
    };
}

macro_rules! list_schemas {
    ($label:literal) => {
        Operation {
            name: "ListSchemas",
            label: $label,
            query: concat!(
                "query ListSchemas($input: SchemasInput) { schemas(input: $input) { ",
                "edges { node { ",
                schema_fields!(),
                " } } pageInfo { hasNextPage endCursor } } }"
            ),
            field: "schemas",
        }
    };
}

const CREATE_SCHEMA: Operation = create_or_update_schema!("create schema");
const UPDATE_SCHEMA: Operation = create_or_update_schema!("update schema");
const LIST_SCHEMAS: Operation = list_schemas!("list schemas");
const GET_SCHEMA: Operation = list_schemas!("get schema");

const ARCHIVE_SCHEMA: Operation = Operation {
    name: "UpdateSchemaStatus",
    label: "delete schema",
    query: "mutation UpdateSchemaStatus($input: UpdateSchemaStatusInput!) { \
            updateSchemaStatus(input: $input) { schema { name isArchived } } }",
    field: "updateSchemaStatus",
};

#[derive(Serialize)]
struct SchemasInput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaStatusInput<'a> {
    name: &'a str,
    is_archived: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaConnection {
    #[serde(default, deserialize_with = "nullable::deserialize")]
    edges: Vec<SchemaEdge>,
    page_info: PageInfo,
}

#[derive(Deserialize)]
struct SchemaEdge {
    node: Schema,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
struct SchemaStatusPayload {
    schema: DeleteSchemaOutput,
}

impl From<SchemaConnection> for SchemaPage {
    fn from(connection: SchemaConnection) -> Self {
        let next_cursor = if connection.page_info.has_next_page {
            connection.page_info.end_cursor
        } else {
            None
        };

        Self {
            schemas: connection.edges.into_iter().map(|edge| edge.node).collect(),
            next_cursor,
        }
    }
}

impl GraphQlClient {
    /// Create a schema
    pub async fn create_schema(
        &self,
        cancel: &CancellationToken,
        input: &CreateSchemaInput,
    ) -> Result<SchemaOutput> {
        let output = self
            .execute(cancel, &CREATE_SCHEMA, &InputVariables { input })
            .await?;
        required(output, &CREATE_SCHEMA, || format!("schema {}", input.name))
    }

    /// Update a schema
    ///
    /// When `revision` is set the server rejects the update if the schema
    /// changed in the meantime.
    pub async fn update_schema(
        &self,
        cancel: &CancellationToken,
        input: &UpdateSchemaInput,
    ) -> Result<SchemaOutput> {
        let output = self
            .execute(cancel, &UPDATE_SCHEMA, &InputVariables { input })
            .await?;
        required(output, &UPDATE_SCHEMA, || format!("schema {}", input.name))
    }

    /// Fetch one page of schemas, starting after `cursor`
    pub async fn list_schemas(
        &self,
        cancel: &CancellationToken,
        cursor: Option<&str>,
    ) -> Result<SchemaPage> {
        self.schema_page(cancel, &LIST_SCHEMAS, cursor).await
    }

    /// Find a schema by name
    ///
    /// Returns `Ok(None)` when no schema has that name.
    pub async fn get_schema(&self, cancel: &CancellationToken, name: &str) -> Result<Option<Schema>> {
        let mut seen_cursors = HashSet::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .schema_page(cancel, &GET_SCHEMA, cursor.as_deref())
                .await?;

            debug!(name, schemas = page.schemas.len(), "Scanning schema page");

            if let Some(schema) = page.schemas.into_iter().find(|s| s.name == name) {
                return Ok(Some(schema));
            }

            match page.next_cursor {
                None => return Ok(None),
                Some(next) if !seen_cursors.insert(next.clone()) => {
                    warn!(cursor = %next, "Schema listing repeated a cursor, stopping");
                    return Ok(None);
                }
                Some(next) => cursor = Some(next),
            }
        }
    }

    /// Archive a schema
    pub async fn delete_schema(
        &self,
        cancel: &CancellationToken,
        input: &DeleteSchemaInput,
    ) -> Result<DeleteSchemaOutput> {
        let status = SchemaStatusInput {
            name: &input.name,
            is_archived: true,
        };
        let payload: Option<SchemaStatusPayload> = self
            .execute(cancel, &ARCHIVE_SCHEMA, &InputVariables { input: &status })
            .await?;
        required(payload, &ARCHIVE_SCHEMA, || format!("schema {}", input.name))
            .map(|payload| payload.schema)
    }

    async fn schema_page(
        &self,
        cancel: &CancellationToken,
        operation: &Operation,
        cursor: Option<&str>,
    ) -> Result<SchemaPage> {
        let connection: Option<SchemaConnection> = self
            .execute(cancel, operation, &InputVariables { input: &SchemasInput { cursor } })
            .await?;
        required(connection, operation, || "schema listing".to_string()).map(SchemaPage::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connection_to_page() {
        let connection: SchemaConnection = serde_json::from_value(json!({
            "edges": [
                {"node": {"name": "Custom.A", "spec": "fields: []", "revision": 2}},
                {"node": {"name": "Custom.B"}}
            ],
            "pageInfo": {"hasNextPage": true, "endCursor": "c-1"}
        }))
        .unwrap();

        let page = SchemaPage::from(connection);
        assert_eq!(page.schemas.len(), 2);
        assert_eq!(page.schemas[0].revision, 2);
        assert_eq!(page.next_cursor.as_deref(), Some("c-1"));
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let connection: SchemaConnection = serde_json::from_value(json!({
            "edges": [],
            "pageInfo": {"hasNextPage": false, "endCursor": "c-9"}
        }))
        .unwrap();

        assert_eq!(SchemaPage::from(connection).next_cursor, None);
    }

    #[test]
    fn test_first_page_omits_cursor() {
        let value = serde_json::to_value(InputVariables {
            input: &SchemasInput { cursor: None },
        })
        .unwrap();
        assert_eq!(value, json!({"input": {}}));
    }

    #[test]
    fn test_archive_input() {
        let value = serde_json::to_value(SchemaStatusInput {
            name: "Custom.A",
            is_archived: true,
        })
        .unwrap();
        assert_eq!(value, json!({"name": "Custom.A", "isArchived": true}));
    }
}
