//! HTTP log source DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;

/// Attributes shared by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpSourceModifiableAttributes {
    pub integration_label: String,
    pub log_stream_type: String,
    pub log_types: Vec<String>,
    pub auth_method: String,
    pub auth_hmac_alg: String,
    pub auth_header_key: String,
    pub auth_password: String,
    pub auth_secret_value: String,
    pub auth_username: String,
    pub auth_bearer_token: String,
}

/// Body of `POST /log-sources/http`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHttpSourceInput {
    #[serde(flatten)]
    pub attributes: HttpSourceModifiableAttributes,
}

/// Body of `PUT /log-sources/http/{integrationId}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHttpSourceInput {
    pub integration_id: String,
    #[serde(flatten)]
    pub attributes: HttpSourceModifiableAttributes,
}

impl Identified for UpdateHttpSourceInput {
    fn id(&self) -> &str {
        &self.integration_id
    }
}
