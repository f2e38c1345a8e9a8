//! GraphQL half of the Panther API
//!
//! S3 log sources, cloud accounts and schemas are managed through the GraphQL
//! endpoint. Each operation is a hand-written document sent in the standard
//! `{query, variables, operationName}` envelope.

mod cloud_accounts;
mod s3_sources;
mod schemas;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{ClientError, OperationExt, Result, decode_error_message};
use crate::transport::{AuthorizedTransport, read_body};

/// A named GraphQL document and the top-level field holding its result
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    /// Sent as `operationName`
    pub name: &'static str,
    /// Used in error messages, e.g. "create S3 source"
    pub label: &'static str,
    /// Full GraphQL document
    pub query: &'static str,
    /// Field of `data` the result is read from
    pub field: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
    operation_name: &'a str,
}

/// Variables of a mutation taking a single `$input` argument
#[derive(Serialize)]
pub(crate) struct InputVariables<'a, I> {
    pub input: &'a I,
}

/// Variables of a lookup by `$id`
#[derive(Serialize)]
pub(crate) struct IdVariables<'a> {
    pub id: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Client for the GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    transport: AuthorizedTransport,
    url: String,
}

impl GraphQlClient {
    /// Create a client posting to the given GraphQL endpoint
    pub fn new(transport: AuthorizedTransport, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// The GraphQL endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run an operation and decode the value of its result field
    ///
    /// A `null` result yields `Ok(None)`. Errors are tagged with the
    /// operation label.
    pub(crate) async fn execute<V: Serialize, T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        operation: &Operation,
        variables: &V,
    ) -> Result<Option<T>> {
        self.run(cancel, operation, variables)
            .await
            .in_operation(operation.label)
    }

    async fn run<V: Serialize, T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        operation: &Operation,
        variables: &V,
    ) -> Result<Option<T>> {
        let envelope = GraphQlRequest {
            query: operation.query,
            variables,
            operation_name: operation.name,
        };
        let body =
            serde_json::to_vec(&envelope).map_err(|e| ClientError::SerializeError(e.to_string()))?;

        let mut request = self.transport.request(Method::POST, &self.url)?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());

        debug!(operation = operation.name, "Executing GraphQL operation");

        let response = self.transport.send(request, cancel).await?;
        let status = response.status();
        let body = read_body(response, cancel).await?;

        if !status.is_success() {
            // Servers answer some failures with a regular `errors` array.
            if let Ok(GraphQlResponse { errors, .. }) = serde_json::from_slice::<GraphQlResponse>(&body) {
                if !errors.is_empty() {
                    return Err(ClientError::GraphQl(
                        errors.into_iter().map(|e| e.message).collect(),
                    ));
                }
            }
            return Err(ClientError::api_error(
                status.as_u16(),
                decode_error_message(&body),
            ));
        }

        let response: GraphQlResponse = serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("invalid GraphQL response: {}", e)))?;

        extract(response, operation.field)
    }
}

fn extract<T: DeserializeOwned>(response: GraphQlResponse, field: &str) -> Result<Option<T>> {
    if !response.errors.is_empty() {
        return Err(ClientError::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    let mut data = response
        .data
        .ok_or_else(|| ClientError::ParseError("GraphQL response has no data".to_string()))?;

    match data.remove(field) {
        None => Err(ClientError::ParseError(format!(
            "GraphQL response has no `{}` field",
            field
        ))),
        Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ClientError::ParseError(format!("invalid `{}` payload: {}", field, e))),
    }
}

/// Turn a missing result into a not-found error of the operation
pub(crate) fn required<T>(
    value: Option<T>,
    operation: &Operation,
    what: impl FnOnce() -> String,
) -> Result<T> {
    value
        .ok_or_else(|| ClientError::NotFound(what()))
        .in_operation(operation.label)
}
