//! Cloud security policy operations

use panther_core::domain::policy::Policy;
use panther_core::dto::policy::{CreatePolicyInput, UpdatePolicyInput};
use tokio_util::sync::CancellationToken;

use super::{RestClient, RestFamily};
use crate::error::Result;

pub const POLICIES: RestFamily = RestFamily::standard("policy", "/policies");

impl RestClient {
    /// Create a cloud security policy
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The policy id, its body and the resource types it covers
    ///
    /// # Returns
    /// The created policy
    pub async fn create_policy(
        &self,
        cancel: &CancellationToken,
        input: &CreatePolicyInput,
    ) -> Result<Policy> {
        self.create(cancel, &POLICIES, input).await
    }

    /// Replace the attributes of a policy
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The policy id and the full set of new attributes
    ///
    /// # Returns
    /// The policy as stored after the update
    pub async fn update_policy(
        &self,
        cancel: &CancellationToken,
        input: &UpdatePolicyInput,
    ) -> Result<Policy> {
        self.update(cancel, &POLICIES, input).await
    }

    /// Get a policy by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The policy id, e.g. `AWS.S3.Bucket.Encrypted`
    ///
    /// # Returns
    /// The policy details
    pub async fn get_policy(&self, cancel: &CancellationToken, id: &str) -> Result<Policy> {
        self.get(cancel, &POLICIES, id).await
    }

    /// Delete a policy
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The policy id
    pub async fn delete_policy(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &POLICIES, id).await
    }
}
