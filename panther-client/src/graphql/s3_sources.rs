//! S3 log source operations

use panther_core::domain::s3_source::S3LogIntegration;
use panther_core::dto::s3_source::{
    CreateS3SourceInput, DeleteSourceInput, DeleteSourceOutput, S3SourceOutput, UpdateS3SourceInput,
};
use tokio_util::sync::CancellationToken;

use super::{GraphQlClient, IdVariables, InputVariables, Operation, required};
use crate::error::Result;

macro_rules! s3_source_fields {
    () => {
        "awsAccountId integrationId integrationLabel integrationType isEditable kmsKey \
         logProcessingRole logStreamType managedBucketNotifications s3Bucket s3Prefix \
         s3PrefixLogTypes { excludedPrefixes logTypes prefix }"
    };
}

const CREATE_S3_SOURCE: Operation = Operation {
    name: "CreateS3Source",
    label: "create S3 source",
    query: concat!(
        "mutation CreateS3Source($input: CreateS3SourceInput!) { ",
        "createS3Source(input: $input) { logSource { ",
        s3_source_fields!(),
        " } } }"
    ),
    field: "createS3Source",
};

const UPDATE_S3_SOURCE: Operation = Operation {
    name: "UpdateS3Source",
    label: "update S3 source",
    query: concat!(
        "mutation UpdateS3Source($input: UpdateS3SourceInput!) { ",
        "updateS3Source(input: $input) { logSource { ",
        s3_source_fields!(),
        " } } }"
    ),
    field: "updateS3Source",
};

const GET_SOURCE: Operation = Operation {
    name: "Source",
    label: "get S3 source",
    query: concat!(
        "query Source($id: ID!) { source(id: $id) { ... on S3LogIntegration { ",
        s3_source_fields!(),
        " } } }"
    ),
    field: "source",
};

const DELETE_SOURCE: Operation = Operation {
    name: "DeleteSource",
    label: "delete source",
    query: "mutation DeleteSource($input: DeleteSourceInput!) { deleteSource(input: $input) { id } }",
    field: "deleteSource",
};

impl GraphQlClient {
    /// Create an S3 log source
    pub async fn create_s3_source(
        &self,
        cancel: &CancellationToken,
        input: &CreateS3SourceInput,
    ) -> Result<S3SourceOutput> {
        let output = self
            .execute(cancel, &CREATE_S3_SOURCE, &InputVariables { input })
            .await?;
        required(output, &CREATE_S3_SOURCE, || {
            format!("S3 source for bucket {}", input.s3_bucket)
        })
    }

    /// Update an existing S3 log source
    pub async fn update_s3_source(
        &self,
        cancel: &CancellationToken,
        input: &UpdateS3SourceInput,
    ) -> Result<S3SourceOutput> {
        let output = self
            .execute(cancel, &UPDATE_S3_SOURCE, &InputVariables { input })
            .await?;
        required(output, &UPDATE_S3_SOURCE, || format!("S3 source {}", input.id))
    }

    /// Fetch an S3 log source by integration id
    pub async fn get_s3_source(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<S3LogIntegration> {
        let source = self
            .execute(cancel, &GET_SOURCE, &IdVariables { id })
            .await?;
        required(source, &GET_SOURCE, || format!("S3 source {}", id))
    }

    /// Delete a log source of any kind
    pub async fn delete_source(
        &self,
        cancel: &CancellationToken,
        input: &DeleteSourceInput,
    ) -> Result<DeleteSourceOutput> {
        let output = self
            .execute(cancel, &DELETE_SOURCE, &InputVariables { input })
            .await?;
        required(output, &DELETE_SOURCE, || format!("source {}", input.id))
    }
}
