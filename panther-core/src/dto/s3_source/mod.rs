//! S3 log source DTOs
//!
//! Inputs and outputs of the `createS3Source`, `updateS3Source` and
//! `deleteSource` GraphQL mutations.

use serde::{Deserialize, Serialize};

use crate::domain::Identified;
use crate::domain::s3_source::{S3LogIntegration, S3PrefixLogTypes};

/// Attributes that can be set at creation and changed afterwards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3SourceModifiableAttributes {
    pub kms_key: String,
    pub label: String,
    pub log_processing_role: String,
    pub log_stream_type: String,
    pub managed_bucket_notifications: bool,
    pub s3_prefix_log_types: Vec<S3PrefixLogTypes>,
}

/// Input of the `createS3Source` mutation
///
/// The bucket and its owning account are fixed once the source exists, so
/// they only appear here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateS3SourceInput {
    pub aws_account_id: String,
    pub s3_bucket: String,
    #[serde(flatten)]
    pub attributes: S3SourceModifiableAttributes,
}

/// Input of the `updateS3Source` mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateS3SourceInput {
    pub id: String,
    #[serde(flatten)]
    pub attributes: S3SourceModifiableAttributes,
}

/// Payload of the create and update mutations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3SourceOutput {
    pub log_source: S3LogIntegration,
}

/// Input of the `deleteSource` mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSourceInput {
    pub id: String,
}

/// Payload of the `deleteSource` mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSourceOutput {
    pub id: String,
}

impl Identified for UpdateS3SourceInput {
    fn id(&self) -> &str {
        &self.id
    }
}
