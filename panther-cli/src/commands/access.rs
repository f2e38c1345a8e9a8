//! User and role command handlers

use anyhow::Result;
use panther_client::PantherApi;
use panther_core::dto::role::{CreateRoleInput, UpdateRoleInput};
use panther_core::dto::user::{CreateUserInput, UpdateUserInput};
use tokio_util::sync::CancellationToken;

use super::ResourceCommands;
use super::output::{print_deleted, print_json, read_input};

pub async fn handle_user_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_user(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateUserInput = read_input(&file)?;
            print_json(&api.create_user(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateUserInput = read_input(&file)?;
            print_json(&api.update_user(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_user(cancel, &id).await?;
            print_deleted("user", &id);
            Ok(())
        }
    }
}

pub async fn handle_role_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_role(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateRoleInput = read_input(&file)?;
            print_json(&api.create_role(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateRoleInput = read_input(&file)?;
            print_json(&api.update_role(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_role(cancel, &id).await?;
            print_deleted("role", &id);
            Ok(())
        }
    }
}
