//! Cloud account operations

use panther_core::domain::cloud_account::CloudAccount;
use panther_core::dto::cloud_account::{
    CloudAccountOutput, CreateCloudAccountInput, DeleteCloudAccountInput,
    DeleteCloudAccountOutput, UpdateCloudAccountInput,
};
use tokio_util::sync::CancellationToken;

use super::{GraphQlClient, IdVariables, InputVariables, Operation, required};
use crate::error::Result;

macro_rules! cloud_account_fields {
    () => {
        "id awsAccountId label awsStackName awsScanConfig { auditRole } \
         awsRegionIgnoreList resourceRegexIgnoreList resourceTypeIgnoreList"
    };
}

const CREATE_CLOUD_ACCOUNT: Operation = Operation {
    name: "CreateCloudAccount",
    label: "create cloud account",
    query: concat!(
        "mutation CreateCloudAccount($input: CreateCloudAccountInput!) { ",
        "createCloudAccount(input: $input) { cloudAccount { ",
        cloud_account_fields!(),
        " } } }"
    ),
    field: "createCloudAccount",
};

const UPDATE_CLOUD_ACCOUNT: Operation = Operation {
    name: "UpdateCloudAccount",
    label: "update cloud account",
    query: concat!(
        "mutation UpdateCloudAccount($input: UpdateCloudAccountInput!) { ",
        "updateCloudAccount(input: $input) { cloudAccount { ",
        cloud_account_fields!(),
        " } } }"
    ),
    field: "updateCloudAccount",
};

const GET_CLOUD_ACCOUNT: Operation = Operation {
    name: "CloudAccount",
    label: "get cloud account",
    query: concat!(
        "query CloudAccount($id: ID!) { cloudAccount(id: $id) { ",
        cloud_account_fields!(),
        " } }"
    ),
    field: "cloudAccount",
};

const DELETE_CLOUD_ACCOUNT: Operation = Operation {
    name: "DeleteCloudAccount",
    label: "delete cloud account",
    query: "mutation DeleteCloudAccount($input: DeleteCloudAccountInput!) { \
            deleteCloudAccount(input: $input) { id } }",
    field: "deleteCloudAccount",
};

impl GraphQlClient {
    /// Register an AWS account for cloud security scanning
    pub async fn create_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &CreateCloudAccountInput,
    ) -> Result<CloudAccountOutput> {
        let output = self
            .execute(cancel, &CREATE_CLOUD_ACCOUNT, &InputVariables { input })
            .await?;
        required(output, &CREATE_CLOUD_ACCOUNT, || {
            format!("cloud account for AWS account {}", input.aws_account_id)
        })
    }

    /// Update a cloud account; the AWS account id cannot change
    pub async fn update_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &UpdateCloudAccountInput,
    ) -> Result<CloudAccountOutput> {
        let output = self
            .execute(cancel, &UPDATE_CLOUD_ACCOUNT, &InputVariables { input })
            .await?;
        required(output, &UPDATE_CLOUD_ACCOUNT, || {
            format!("cloud account {}", input.id)
        })
    }

    /// Get a cloud account by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The server-assigned cloud account id
    ///
    /// # Returns
    /// The cloud account, or a not-found error when the server answers `null`
    pub async fn get_cloud_account(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<CloudAccount> {
        let account = self
            .execute(cancel, &GET_CLOUD_ACCOUNT, &IdVariables { id })
            .await?;
        required(account, &GET_CLOUD_ACCOUNT, || format!("cloud account {}", id))
    }

    /// Remove a cloud account
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The id of the account to remove
    ///
    /// # Returns
    /// The id of the removed account
    pub async fn delete_cloud_account(
        &self,
        cancel: &CancellationToken,
        input: &DeleteCloudAccountInput,
    ) -> Result<DeleteCloudAccountOutput> {
        let output = self
            .execute(cancel, &DELETE_CLOUD_ACCOUNT, &InputVariables { input })
            .await?;
        required(output, &DELETE_CLOUD_ACCOUNT, || {
            format!("cloud account {}", input.id)
        })
    }
}
