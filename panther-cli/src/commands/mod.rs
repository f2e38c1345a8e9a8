//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod access;
mod detections;
mod output;
mod schema;
mod sources;

pub use schema::SchemaCommands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use panther_client::{PantherApi, PantherClient};
use tokio_util::sync::CancellationToken;

/// Verbs shared by every resource family
#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Fetch a resource by id
    Get {
        /// Resource id
        id: String,
    },
    /// Create a resource from a JSON file
    Create {
        /// Path to the create input, `-` for stdin
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update a resource from a JSON file
    Update {
        /// Path to the update input, `-` for stdin
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a resource by id
    Delete {
        /// Resource id
        id: String,
    },
}

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the endpoints derived from the configured URL
    Endpoints,
    /// S3 log sources
    S3Source {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// HTTP log sources
    HttpSource {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Cloud accounts
    CloudAccount {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Custom log schemas
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
    /// Streaming rules
    Rule {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Cloud security policies
    Policy {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Scheduled rules
    ScheduledRule {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Simple (YAML) rules
    SimpleRule {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Users
    User {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Roles
    Role {
        #[command(subcommand)]
        command: ResourceCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(
    command: Commands,
    client: &PantherClient,
    cancel: &CancellationToken,
) -> Result<()> {
    let api: &dyn PantherApi = client;

    match command {
        Commands::Endpoints => {
            show_endpoints(client);
            Ok(())
        }
        Commands::S3Source { command } => sources::handle_s3_source_command(command, api, cancel).await,
        Commands::HttpSource { command } => {
            sources::handle_http_source_command(command, api, cancel).await
        }
        Commands::CloudAccount { command } => {
            sources::handle_cloud_account_command(command, api, cancel).await
        }
        Commands::Schema { command } => schema::handle_schema_command(command, api, cancel).await,
        Commands::Rule { command } => detections::handle_rule_command(command, api, cancel).await,
        Commands::Policy { command } => detections::handle_policy_command(command, api, cancel).await,
        Commands::ScheduledRule { command } => {
            detections::handle_scheduled_rule_command(command, api, cancel).await
        }
        Commands::SimpleRule { command } => {
            detections::handle_simple_rule_command(command, api, cancel).await
        }
        Commands::User { command } => access::handle_user_command(command, api, cancel).await,
        Commands::Role { command } => access::handle_role_command(command, api, cancel).await,
    }
}

fn show_endpoints(client: &PantherClient) {
    let endpoints = client.endpoints();
    println!("{}", "Panther API endpoints:".bold());
    println!("  Root:         {}", endpoints.root);
    println!("  GraphQL:      {}", endpoints.graphql);
    println!("  REST:         {}", endpoints.rest);
    println!("  HTTP sources: {}", endpoints.http_source_url());
}
