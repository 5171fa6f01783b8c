//! # jsd-cli: CLI Tool for jsd
//!
//! Provides the `jsd` command-line interface over the schema store and
//! the default-insertion core.
//!
//! ## Subcommands
//!
//! - `jsd fill`: Fill a JSON/YAML document from schema defaults,
//!   optionally validating the result.
//! - `jsd schemas`: List the schemas in the configured directory.
//!
//! ```bash
//! jsd --schema-dir schemas fill --schema request.schema.json request.json
//! JSD_VALIDATE=1 jsd fill -s request.schema.json - < request.json
//! jsd schemas --long
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers delegate to
//!   `jsd-schema` and `jsd-defaults` and contain no insertion logic.
//! - stdout carries documents and listings only; diagnostics go to
//!   stderr through `tracing`.

pub mod config;
pub mod fill;
pub mod schemas;
