//! Log source and cloud account command handlers

use anyhow::Result;
use panther_client::PantherApi;
use panther_core::dto::cloud_account::{
    CreateCloudAccountInput, DeleteCloudAccountInput, UpdateCloudAccountInput,
};
use panther_core::dto::http_source::{CreateHttpSourceInput, UpdateHttpSourceInput};
use panther_core::dto::s3_source::{CreateS3SourceInput, DeleteSourceInput, UpdateS3SourceInput};
use tokio_util::sync::CancellationToken;

use super::ResourceCommands;
use super::output::{print_deleted, print_json, read_input};

/// Handle S3 source commands
pub async fn handle_s3_source_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_s3_source(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateS3SourceInput = read_input(&file)?;
            print_json(&api.create_s3_source(cancel, &input).await?.log_source)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateS3SourceInput = read_input(&file)?;
            print_json(&api.update_s3_source(cancel, &input).await?.log_source)
        }
        ResourceCommands::Delete { id } => {
            let output = api.delete_source(cancel, &DeleteSourceInput { id }).await?;
            print_deleted("S3 source", &output.id);
            Ok(())
        }
    }
}

/// Handle HTTP source commands
pub async fn handle_http_source_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_http_source(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateHttpSourceInput = read_input(&file)?;
            print_json(&api.create_http_source(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateHttpSourceInput = read_input(&file)?;
            print_json(&api.update_http_source(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_http_source(cancel, &id).await?;
            print_deleted("HTTP source", &id);
            Ok(())
        }
    }
}

/// Handle cloud account commands
pub async fn handle_cloud_account_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_cloud_account(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateCloudAccountInput = read_input(&file)?;
            print_json(&api.create_cloud_account(cancel, &input).await?.cloud_account)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateCloudAccountInput = read_input(&file)?;
            print_json(&api.update_cloud_account(cancel, &input).await?.cloud_account)
        }
        ResourceCommands::Delete { id } => {
            let output = api
                .delete_cloud_account(cancel, &DeleteCloudAccountInput { id })
                .await?;
            print_deleted("cloud account", &output.id);
            Ok(())
        }
    }
}
