//! # Schemas Subcommand
//!
//! Lists the references of every schema in the configured directory, one
//! per line, sorted.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use jsd_schema::SchemaStore;

use crate::config::CliConfig;

/// Arguments for the `jsd schemas` subcommand.
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Also print the top-level `type` of each schema.
    #[arg(long)]
    pub long: bool,
}

/// Execute the schemas subcommand, writing the listing to `out`.
pub fn run_schemas(args: &SchemasArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let store = SchemaStore::load_dir(&config.schema_dir).with_context(|| {
        format!("failed to load schemas from {}", config.schema_dir.display())
    })?;

    for reference in store.references() {
        if args.long {
            let kind = store
                .get(reference)
                .and_then(|schema| schema.get("type"))
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(out, "{reference}\t{kind}")?;
        } else {
            writeln!(out, "{reference}")?;
        }
    }

    Ok(0)
}
