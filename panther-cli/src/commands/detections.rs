//! Detection command handlers: rules, policies, scheduled and simple rules

use anyhow::Result;
use panther_client::PantherApi;
use panther_core::dto::policy::{CreatePolicyInput, UpdatePolicyInput};
use panther_core::dto::rule::{CreateRuleInput, UpdateRuleInput};
use panther_core::dto::scheduled_rule::{CreateScheduledRuleInput, UpdateScheduledRuleInput};
use panther_core::dto::simple_rule::{CreateSimpleRuleInput, UpdateSimpleRuleInput};
use tokio_util::sync::CancellationToken;

use super::ResourceCommands;
use super::output::{print_deleted, print_json, read_input};

pub async fn handle_rule_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_rule(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateRuleInput = read_input(&file)?;
            print_json(&api.create_rule(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateRuleInput = read_input(&file)?;
            print_json(&api.update_rule(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_rule(cancel, &id).await?;
            print_deleted("rule", &id);
            Ok(())
        }
    }
}

pub async fn handle_policy_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_policy(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreatePolicyInput = read_input(&file)?;
            print_json(&api.create_policy(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdatePolicyInput = read_input(&file)?;
            print_json(&api.update_policy(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_policy(cancel, &id).await?;
            print_deleted("policy", &id);
            Ok(())
        }
    }
}

pub async fn handle_scheduled_rule_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_scheduled_rule(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateScheduledRuleInput = read_input(&file)?;
            print_json(&api.create_scheduled_rule(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateScheduledRuleInput = read_input(&file)?;
            print_json(&api.update_scheduled_rule(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_scheduled_rule(cancel, &id).await?;
            print_deleted("scheduled rule", &id);
            Ok(())
        }
    }
}

pub async fn handle_simple_rule_command(
    command: ResourceCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ResourceCommands::Get { id } => print_json(&api.get_simple_rule(cancel, &id).await?),
        ResourceCommands::Create { file } => {
            let input: CreateSimpleRuleInput = read_input(&file)?;
            print_json(&api.create_simple_rule(cancel, &input).await?)
        }
        ResourceCommands::Update { file } => {
            let input: UpdateSimpleRuleInput = read_input(&file)?;
            print_json(&api.update_simple_rule(cancel, &input).await?)
        }
        ResourceCommands::Delete { id } => {
            api.delete_simple_rule(cancel, &id).await?;
            print_deleted("simple rule", &id);
            Ok(())
        }
    }
}
