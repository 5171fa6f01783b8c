//! # jsd CLI entry point
//!
//! Parses command-line arguments, initializes tracing, resolves
//! configuration, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsd_cli::config::CliConfig;
use jsd_cli::fill::{run_fill, FillArgs};
use jsd_cli::schemas::{run_schemas, SchemasArgs};

/// Fill JSON documents from JSON Schema defaults.
#[derive(Parser, Debug)]
#[command(name = "jsd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory of `*.schema.json` / `*.schema.yaml` files
    /// (overrides JSD_SCHEMA_DIR).
    #[arg(long, global = true)]
    schema_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill a document's missing fields from schema defaults.
    Fill(FillArgs),

    /// List the schemas available in the schema directory.
    Schemas(SchemasArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CliConfig::from_env() {
        Ok(config) => config.with_schema_dir(cli.schema_dir),
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    tracing::debug!(schema_dir = %config.schema_dir.display(), "resolved configuration");

    let result = match cli.command {
        Commands::Fill(args) => run_fill(&args, &config),
        Commands::Schemas(args) => run_schemas(&args, &config, &mut std::io::stdout().lock()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
