//! # Document Loading
//!
//! Reads instance documents (and schema files) as `serde_json::Value`,
//! choosing JSON or YAML from the file extension, and renders filled
//! documents back out.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;

/// Textual encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// YAML text (JSON-compatible subset).
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` are YAML; every other extension is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse document text in the given format.
///
/// `origin` names the source in error messages (a path or `<stdin>`).
pub fn parse_document(
    text: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<Value, SchemaError> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|e| SchemaError::DocumentLoadError {
                path: origin.to_string(),
                reason: format!("invalid JSON: {e}"),
            })
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| SchemaError::DocumentLoadError {
                path: origin.to_string(),
                reason: format!("YAML parse error: {e}"),
            })
        }
    }
}

/// Load a JSON or YAML document from disk.
pub fn load_document(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaError::DocumentLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_document(
        &content,
        DocumentFormat::from_path(path),
        &path.display().to_string(),
    )
}

/// Render a document as text.
pub fn render_document(
    value: &Value,
    format: DocumentFormat,
    pretty: bool,
) -> Result<String, SchemaError> {
    let rendered = match format {
        DocumentFormat::Json if pretty => serde_json::to_string_pretty(value)
            .map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::to_string(value).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
    };
    rendered.map_err(|reason| SchemaError::DocumentLoadError {
        path: "<output>".to_string(),
        reason: format!("cannot render document: {reason}"),
    })
}
