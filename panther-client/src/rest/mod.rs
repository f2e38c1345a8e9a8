//! REST half of the Panther API
//!
//! Every REST family follows the same shape: `POST {path}` creates,
//! `PUT|GET|DELETE {path}/{id}` update, fetch and delete. Families differ only
//! in their path and in the status each verb answers with, which
//! [`RestFamily`] captures. Any other status is a failure, whatever the body.

mod http_sources;
mod policies;
mod roles;
mod rules;
mod users;

use panther_core::Identified;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{ClientError, OperationExt, Result, decode_error_message};
use crate::transport::{AuthorizedTransport, read_body};

pub use http_sources::HTTP_SOURCES;
pub use policies::POLICIES;
pub use roles::ROLES;
pub use rules::{RULES, SCHEDULED_RULES, SIMPLE_RULES};
pub use users::USERS;

/// Path and expected statuses of a REST resource family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestFamily {
    /// Human readable name used in error messages, e.g. "rule"
    pub name: &'static str,
    /// Path below the REST root, e.g. `/rules`
    pub path: &'static str,
    pub create_status: StatusCode,
    pub update_status: StatusCode,
    pub get_status: StatusCode,
    pub delete_status: StatusCode,
}

impl RestFamily {
    /// A family answering 200 to everything but delete, which answers 204
    pub const fn standard(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            create_status: StatusCode::OK,
            update_status: StatusCode::OK,
            get_status: StatusCode::OK,
            delete_status: StatusCode::NO_CONTENT,
        }
    }
}

/// Client for the REST endpoints
#[derive(Debug, Clone)]
pub struct RestClient {
    transport: AuthorizedTransport,
    root: String,
}

impl RestClient {
    /// Create a client for the REST root
    pub fn new(transport: AuthorizedTransport, root: impl Into<String>) -> Self {
        Self {
            transport,
            root: root.into(),
        }
    }

    /// The REST root URL
    pub fn root(&self) -> &str {
        &self.root
    }

    /// URL of a family collection
    pub fn family_url(&self, family: &RestFamily) -> Result<Url> {
        let url = format!("{}{}", self.root, family.path);
        Url::parse(&url).map_err(|e| ClientError::InvalidRequest(format!("invalid URL {}: {}", url, e)))
    }

    /// URL of a single item, with the id percent-encoded as one path segment
    pub fn item_url(&self, family: &RestFamily, id: &str) -> Result<Url> {
        if id.is_empty() {
            return Err(ClientError::InvalidRequest(format!(
                "{} id must not be empty",
                family.name
            )));
        }

        let mut url = self.family_url(family)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidRequest(format!("{} is not a base URL", self.root)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Send one request and return the body of the expected response
    ///
    /// A body, when given, is sent as JSON. Any status other than `expected`
    /// becomes an [`ClientError::ApiError`] carrying the decoded message.
    pub(crate) async fn request(
        &self,
        cancel: &CancellationToken,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        expected: StatusCode,
    ) -> Result<Vec<u8>> {
        let mut request = Request::new(method, url);
        if let Some(body) = body {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }

        let response = self.transport.send(request, cancel).await?;
        let status = response.status();
        let body = read_body(response, cancel).await?;

        if status != expected {
            return Err(ClientError::api_error(
                status.as_u16(),
                decode_error_message(&body),
            ));
        }

        Ok(body)
    }

    /// `POST {path}`
    pub(crate) async fn create<I, O>(
        &self,
        cancel: &CancellationToken,
        family: &RestFamily,
        input: &I,
    ) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let operation = format!("create {}", family.name);
        debug!(family = family.name, "Creating");

        async {
            let url = self.family_url(family)?;
            let body = self
                .request(cancel, Method::POST, url, Some(encode(input)?), family.create_status)
                .await?;
            decode(&body)
        }
        .await
        .in_operation(operation)
    }

    /// `PUT {path}/{id}`
    pub(crate) async fn update<I, O>(
        &self,
        cancel: &CancellationToken,
        family: &RestFamily,
        input: &I,
    ) -> Result<O>
    where
        I: Serialize + Identified,
        O: DeserializeOwned,
    {
        let operation = format!("update {}", family.name);
        debug!(family = family.name, id = input.id(), "Updating");

        async {
            let url = self.item_url(family, input.id())?;
            let body = self
                .request(cancel, Method::PUT, url, Some(encode(input)?), family.update_status)
                .await?;
            decode(&body)
        }
        .await
        .in_operation(operation)
    }

    /// `GET {path}/{id}`
    pub(crate) async fn get<O: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        family: &RestFamily,
        id: &str,
    ) -> Result<O> {
        let operation = format!("get {}", family.name);
        debug!(family = family.name, id, "Fetching");

        async {
            let url = self.item_url(family, id)?;
            let body = self
                .request(cancel, Method::GET, url, None, family.get_status)
                .await?;
            decode(&body)
        }
        .await
        .in_operation(operation)
    }

    /// `DELETE {path}/{id}`
    pub(crate) async fn delete(
        &self,
        cancel: &CancellationToken,
        family: &RestFamily,
        id: &str,
    ) -> Result<()> {
        let operation = format!("delete {}", family.name);
        debug!(family = family.name, id, "Deleting");

        async {
            let url = self.item_url(family, id)?;
            self.request(cancel, Method::DELETE, url, None, family.delete_status)
                .await
                .map(drop)
        }
        .await
        .in_operation(operation)
    }
}

fn encode<I: Serialize>(input: &I) -> Result<Vec<u8>> {
    serde_json::to_vec(input).map_err(|e| ClientError::SerializeError(e.to_string()))
}

fn decode<O: DeserializeOwned>(body: &[u8]) -> Result<O> {
    serde_json::from_slice(body).map_err(|e| ClientError::ParseError(e.to_string()))
}
