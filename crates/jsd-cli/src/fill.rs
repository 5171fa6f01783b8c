//! # Fill Subcommand
//!
//! Loads a schema store, fills one instance document from the selected
//! schema's `default` annotations, optionally validates the result, and
//! writes it out.
//!
//! ```bash
//! jsd fill --schema request.schema.json request.json
//! cat request.json | jsd fill --schema https://example.org/request.schema.json --validate
//! jsd fill --schema request.schema.yaml config.yaml --in-place
//! ```
//!
//! Exit codes: 0 on success, 1 when insertion or validation fails.
//! Operational errors (unreadable files, unknown schema) are returned as
//! `Err` and reported by `main`.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use jsd_defaults::DefaultInserter;
use jsd_schema::{
    load_document, parse_document, render_document, DocumentFormat, SchemaError, SchemaStore,
};

use crate::config::CliConfig;

/// Output encoding selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

/// Arguments for the `jsd fill` subcommand.
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Schema to fill from: a `$id` URI or a schema filename.
    #[arg(long, short)]
    pub schema: String,

    /// Instance document (JSON or YAML by extension). Reads JSON from
    /// stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the filled document here instead of stdout.
    #[arg(long, short, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite INPUT with the filled document.
    #[arg(long)]
    pub in_place: bool,

    /// Output format. Defaults to the input's format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,

    /// Validate the filled document against the schema.
    #[arg(long)]
    pub validate: bool,
}

impl FillArgs {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Execute the fill subcommand.
pub fn run_fill(args: &FillArgs, config: &CliConfig) -> Result<u8> {
    let store = SchemaStore::load_dir(&config.schema_dir).with_context(|| {
        format!("failed to load schemas from {}", config.schema_dir.display())
    })?;
    tracing::info!(schema_count = store.len(), "loaded schema store");

    let reference = store
        .lookup(&args.schema)
        .with_context(|| format!("unknown schema {:?}", args.schema))?;

    let input_path = args.input_path();
    if args.in_place && input_path.is_none() {
        bail!("--in-place requires an INPUT file");
    }

    let (instance, input_format) = match input_path {
        Some(path) => (
            load_document(path).context("failed to read input document")?,
            DocumentFormat::from_path(path),
        ),
        None => (read_stdin()?, DocumentFormat::Json),
    };

    let filled = match DefaultInserter::new(&store, reference.clone()).fill(instance) {
        Ok(filled) => filled,
        Err(partial) => {
            eprintln!("FAIL: {}", partial.error);
            return Ok(1);
        }
    };

    if args.validate || config.validate {
        match store.validate(&filled, &reference) {
            Ok(()) => tracing::info!(%reference, "filled document is valid"),
            Err(SchemaError::ValidationFailed { count, details, .. }) => {
                eprintln!("FAIL: {count} validation error(s) against {reference}");
                for detail in &details {
                    eprintln!("  {detail}");
                }
                return Ok(1);
            }
            Err(other) => return Err(other).context("validation could not run"),
        }
    }

    let format = args.format.map(DocumentFormat::from).unwrap_or_else(|| {
        args.output
            .as_deref()
            .map(DocumentFormat::from_path)
            .unwrap_or(input_format)
    });
    let mut rendered = render_document(&filled, format, !args.compact)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    let destination = if args.in_place {
        input_path.map(Path::to_path_buf)
    } else {
        args.output.clone()
    };
    match destination {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote filled document");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(0)
}

fn read_stdin() -> Result<serde_json::Value> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(parse_document(&text, DocumentFormat::Json, "<stdin>")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const REQUEST_SCHEMA: &str = r#"{
        "$id": "https://example.org/request.schema.json",
        "type": "object",
        "properties": {
            "quality": {"type": "string", "default": "high"},
            "faces": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {"hdri": {"type": "string", "default": "apartment"}},
                    "required": ["hdri"]
                }
            },
            "size": {"type": "integer"}
        }
    }"#;

    struct Fixture {
        dir: tempfile::TempDir,
        config: CliConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let schema_dir = dir.path().join("schemas");
            std::fs::create_dir(&schema_dir).unwrap();
            std::fs::write(schema_dir.join("request.schema.json"), REQUEST_SCHEMA).unwrap();
            Self {
                config: CliConfig {
                    schema_dir,
                    validate: false,
                },
                dir,
            }
        }

        fn file(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            std::fs::write(&path, content).unwrap();
            path
        }

        fn args(&self, input: PathBuf) -> FillArgs {
            FillArgs {
                schema: "request.schema.json".to_string(),
                input: Some(input),
                output: Some(self.dir.path().join("out.json")),
                in_place: false,
                format: None,
                compact: false,
                validate: false,
            }
        }

        fn output(&self) -> Value {
            load_document(&self.dir.path().join("out.json")).unwrap()
        }
    }

    #[test]
    fn fills_json_file_to_output() {
        let fx = Fixture::new();
        let input = fx.file("request.json", r#"{"faces": [{}]}"#);
        let code = run_fill(&fx.args(input), &fx.config).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            fx.output(),
            json!({"quality": "high", "faces": [{"hdri": "apartment"}]})
        );
    }

    #[test]
    fn schema_selected_by_id() {
        let fx = Fixture::new();
        let input = fx.file("request.json", "{}");
        let mut args = fx.args(input);
        args.schema = "https://example.org/request.schema.json".to_string();
        assert_eq!(run_fill(&args, &fx.config).unwrap(), 0);
        assert_eq!(fx.output(), json!({"quality": "high"}));
    }

    #[test]
    fn in_place_preserves_yaml() {
        let fx = Fixture::new();
        let input = fx.file("request.yaml", "quality: low\n");
        let mut args = fx.args(input.clone());
        args.output = None;
        args.in_place = true;
        assert_eq!(run_fill(&args, &fx.config).unwrap(), 0);

        let written = std::fs::read_to_string(&input).unwrap();
        assert_eq!(written.trim(), "quality: low");
    }

    #[test]
    fn shape_fault_exits_one_without_writing() {
        let fx = Fixture::new();
        let input = fx.file("request.json", r#"{"faces": ["oops"]}"#);
        assert_eq!(run_fill(&fx.args(input), &fx.config).unwrap(), 1);
        assert!(!fx.dir.path().join("out.json").exists());
    }

    #[test]
    fn validation_failure_exits_one() {
        let fx = Fixture::new();
        let input = fx.file("request.json", r#"{"size": "large"}"#);
        let mut args = fx.args(input);
        args.validate = true;
        assert_eq!(run_fill(&args, &fx.config).unwrap(), 1);
    }

    #[test]
    fn validation_enabled_by_config() {
        let fx = Fixture::new();
        let input = fx.file("request.json", r#"{"size": "large"}"#);
        let config = CliConfig {
            validate: true,
            ..fx.config.clone()
        };
        assert_eq!(run_fill(&fx.args(input), &config).unwrap(), 1);
    }

    #[test]
    fn validation_passes_after_fill() {
        let fx = Fixture::new();
        // `hdri` is required by the item schema and supplied by its default.
        let input = fx.file("request.json", r#"{"faces": [{}, {"hdri": "studio"}], "size": 2}"#);
        let mut args = fx.args(input);
        args.validate = true;
        assert_eq!(run_fill(&args, &fx.config).unwrap(), 0);
    }

    #[test]
    fn unknown_schema_is_an_error() {
        let fx = Fixture::new();
        let input = fx.file("request.json", "{}");
        let mut args = fx.args(input);
        args.schema = "missing.schema.json".to_string();
        let err = run_fill(&args, &fx.config).unwrap_err();
        assert!(format!("{err:#}").contains("missing.schema.json"));
    }

    #[test]
    fn missing_schema_dir_is_an_error() {
        let fx = Fixture::new();
        let input = fx.file("request.json", "{}");
        let config = CliConfig {
            schema_dir: fx.dir.path().join("nope"),
            validate: false,
        };
        assert!(run_fill(&fx.args(input), &config).is_err());
    }

    #[test]
    fn in_place_requires_input() {
        let fx = Fixture::new();
        let mut args = fx.args(PathBuf::from("-"));
        args.output = None;
        args.in_place = true;
        let err = run_fill(&args, &fx.config).unwrap_err();
        assert!(err.to_string().contains("--in-place"));
    }

    #[test]
    fn explicit_yaml_output_format() {
        let fx = Fixture::new();
        let input = fx.file("request.json", "{}");
        let mut args = fx.args(input);
        args.format = Some(OutputFormat::Yaml);
        assert_eq!(run_fill(&args, &fx.config).unwrap(), 0);
        let text = std::fs::read_to_string(fx.dir.path().join("out.json")).unwrap();
        assert_eq!(text.trim(), "quality: high");
    }
}
