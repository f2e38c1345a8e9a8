//! Role operations

use panther_core::domain::role::Role;
use panther_core::dto::role::{CreateRoleInput, UpdateRoleInput};
use tokio_util::sync::CancellationToken;

use super::{RestClient, RestFamily};
use crate::error::Result;

pub const ROLES: RestFamily = RestFamily::standard("role", "/roles");

impl RestClient {
    /// Create a role; the server assigns the id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - Name, permissions and log type access of the role
    ///
    /// # Returns
    /// The created role
    pub async fn create_role(&self, cancel: &CancellationToken, input: &CreateRoleInput) -> Result<Role> {
        self.create(cancel, &ROLES, input).await
    }

    /// Replace the attributes of a role
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The role id and the full set of new attributes
    ///
    /// # Returns
    /// The role as stored after the update
    pub async fn update_role(&self, cancel: &CancellationToken, input: &UpdateRoleInput) -> Result<Role> {
        self.update(cancel, &ROLES, input).await
    }

    /// Get a role by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The role id
    ///
    /// # Returns
    /// The role details
    pub async fn get_role(&self, cancel: &CancellationToken, id: &str) -> Result<Role> {
        self.get(cancel, &ROLES, id).await
    }

    /// Delete a role
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The role id
    pub async fn delete_role(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &ROLES, id).await
    }
}
