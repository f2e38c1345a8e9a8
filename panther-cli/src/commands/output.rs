//! Shared input and output helpers

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a JSON document from a file, or from stdin when the path is `-`
pub fn read_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read input from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid input document {}", path.display()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", json);
    Ok(())
}

/// Report a successful delete on stderr
pub fn print_deleted(kind: &str, id: &str) {
    eprintln!("{} {} {}", "✓".green(), format!("Deleted {}", kind).bold(), id);
}
