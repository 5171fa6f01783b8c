//! CLI configuration.
//!
//! Settings come from environment variables, overridden by command-line
//! flags. Unset variables fall back to defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the schema directory.
pub const SCHEMA_DIR_VAR: &str = "JSD_SCHEMA_DIR";
/// Environment variable enabling validation after fill.
pub const VALIDATE_VAR: &str = "JSD_VALIDATE";
/// Schema directory used when nothing else is configured.
pub const DEFAULT_SCHEMA_DIR: &str = "schemas";

/// Error loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A boolean variable held something other than a recognized flag value.
    #[error("{var} must be one of 1/0, true/false, yes/no, on/off; got {value:?}")]
    InvalidBool {
        /// The variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding `*.schema.json` / `*.schema.yaml` files.
    pub schema_dir: PathBuf,
    /// Validate documents against their schema after filling.
    pub validate: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            schema_dir: PathBuf::from(DEFAULT_SCHEMA_DIR),
            validate: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// Variables:
    /// - `JSD_SCHEMA_DIR` (default: `schemas`)
    /// - `JSD_VALIDATE` (default: `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let schema_dir = lookup(SCHEMA_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.schema_dir);
        let validate = match lookup(VALIDATE_VAR) {
            Some(value) => parse_bool(VALIDATE_VAR, &value)?,
            None => defaults.validate,
        };
        Ok(Self {
            schema_dir,
            validate,
        })
    }

    /// Apply a `--schema-dir` flag, if given.
    pub fn with_schema_dir(mut self, schema_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = schema_dir {
            self.schema_dir = dir;
        }
        self
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
