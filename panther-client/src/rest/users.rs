//! User operations

use panther_core::domain::user::User;
use panther_core::dto::user::{CreateUserInput, UpdateUserInput};
use tokio_util::sync::CancellationToken;

use super::{RestClient, RestFamily};
use crate::error::Result;

pub const USERS: RestFamily = RestFamily::standard("user", "/users");

impl RestClient {
    /// Invite a user; the server assigns the id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - Email, names and role of the new user
    ///
    /// # Returns
    /// The invited user
    pub async fn create_user(&self, cancel: &CancellationToken, input: &CreateUserInput) -> Result<User> {
        self.create(cancel, &USERS, input).await
    }

    /// Replace the attributes of a user
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `input` - The user id and the full set of new attributes
    ///
    /// # Returns
    /// The user as stored after the update
    pub async fn update_user(&self, cancel: &CancellationToken, input: &UpdateUserInput) -> Result<User> {
        self.update(cancel, &USERS, input).await
    }

    /// Get a user by id
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The user id
    ///
    /// # Returns
    /// The user details
    pub async fn get_user(&self, cancel: &CancellationToken, id: &str) -> Result<User> {
        self.get(cancel, &USERS, id).await
    }

    /// Delete a user
    ///
    /// # Arguments
    /// * `cancel` - Aborts the call when cancelled
    /// * `id` - The user id
    pub async fn delete_user(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        self.delete(cancel, &USERS, id).await
    }
}
