//! Cloud account DTOs

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::cloud_account::{AwsScanConfig, CloudAccount};

/// Attributes shared by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccountModifiableAttributes {
    pub label: String,
    pub aws_scan_config: AwsScanConfig,
    pub aws_region_ignore_list: Vec<String>,
    pub resource_regex_ignore_list: Vec<String>,
    pub resource_type_ignore_list: Vec<String>,
}

/// Input of the `createCloudAccount` mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCloudAccountInput {
    /// Fixed for the lifetime of the integration
    pub aws_account_id: String,
    #[serde(flatten)]
    pub attributes: CloudAccountModifiableAttributes,
}

/// Input of the `updateCloudAccount` mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCloudAccountInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: CloudAccountModifiableAttributes,
}

/// Payload of the create and update mutations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccountOutput {
    pub cloud_account: CloudAccount,
}

/// Input of the `deleteCloudAccount` mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCloudAccountInput {
    pub id: String,
}

/// Payload of the `deleteCloudAccount` mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCloudAccountOutput {
    pub id: String,
}

impl Identified for UpdateCloudAccountInput {
    fn id(&self) -> &str {
        &self.id
    }
}
