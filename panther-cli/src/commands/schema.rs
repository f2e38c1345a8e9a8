//! Schema command handlers
//!
//! Schemas are addressed by name rather than id, and support listing.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use panther_client::PantherApi;
use panther_core::domain::schema::Schema;
use panther_core::dto::schema::{CreateSchemaInput, DeleteSchemaInput, UpdateSchemaInput};
use tokio_util::sync::CancellationToken;

use super::output::{print_deleted, print_json, read_input};

/// Schema subcommands
#[derive(Subcommand)]
pub enum SchemaCommands {
    /// Fetch a schema by name
    Get {
        /// Schema name, e.g. Custom.MyLogs
        name: String,
    },
    /// List one page of schemas
    List {
        /// Cursor returned by a previous page
        #[arg(long)]
        cursor: Option<String>,
    },
    /// Create a schema from a JSON file
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Update a schema from a JSON file
    Update {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Archive a schema
    Delete {
        /// Schema name
        name: String,
    },
}

/// Handle schema commands
pub async fn handle_schema_command(
    command: SchemaCommands,
    api: &dyn PantherApi,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        SchemaCommands::Get { name } => match api.get_schema(cancel, &name).await? {
            Some(schema) => print_json(&schema),
            None => bail!("Schema {} not found", name),
        },
        SchemaCommands::List { cursor } => {
            let page = api.list_schemas(cancel, cursor.as_deref()).await?;
            print_schema_page(&page.schemas, page.next_cursor.as_deref());
            Ok(())
        }
        SchemaCommands::Create { file } => {
            let input: CreateSchemaInput = read_input(&file)?;
            print_json(&api.create_schema(cancel, &input).await?.schema)
        }
        SchemaCommands::Update { file } => {
            let input: UpdateSchemaInput = read_input(&file)?;
            print_json(&api.update_schema(cancel, &input).await?.schema)
        }
        SchemaCommands::Delete { name } => {
            let output = api.delete_schema(cancel, &DeleteSchemaInput { name }).await?;
            print_deleted("schema", &output.name);
            Ok(())
        }
    }
}

fn print_schema_page(schemas: &[Schema], next_cursor: Option<&str>) {
    if schemas.is_empty() {
        println!("{}", "No schemas found.".yellow());
        return;
    }

    println!("{}", format!("Found {} schema(s):", schemas.len()).bold());
    println!();
    for schema in schemas {
        let state = if schema.is_archived {
            "archived".dimmed()
        } else if schema.is_managed {
            "managed".cyan()
        } else {
            "active".green()
        };
        println!("  {} {} (revision {}, {})", "▸".cyan(), schema.name.bold(), schema.revision, state);
    }

    if let Some(cursor) = next_cursor {
        println!();
        println!("Next page: --cursor {}", cursor.dimmed());
    }
}
