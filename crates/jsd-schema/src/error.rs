//! # Error Types
//!
//! Errors raised by the schema store: loading schema files, resolving
//! references, reading instance documents, and validating filled
//! documents. All variants carry the identifier or path they concern so
//! callers can report them without extra context.

use thiserror::Error;

/// A single validation violation with diagnostic context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetail {
    /// The JSON Pointer to the instance field that failed validation.
    pub instance_path: String,
    /// The JSON Pointer within the schema that triggered the violation.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for ValidationDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Errors returned by schema store operations.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A schema file or in-memory document could not be loaded.
    #[error("failed to load schema {path}: {reason}")]
    SchemaLoadError {
        /// Path or identifier of the schema that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// An instance document could not be read or parsed.
    #[error("failed to load document {path}: {reason}")]
    DocumentLoadError {
        /// Path to the document that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The schema could not be compiled into a validator.
    #[error("failed to compile schema {schema_id}: {reason}")]
    SchemaCompileError {
        /// The schema reference.
        schema_id: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The document failed validation against its schema.
    #[error("{count} validation error(s) against {schema_id}")]
    ValidationFailed {
        /// The schema that was violated.
        schema_id: String,
        /// Number of violations found.
        count: usize,
        /// Individual violation details.
        details: Vec<ValidationDetail>,
    },

    /// No schema is registered under the requested reference.
    #[error("schema not found: {0}")]
    SchemaNotFound(String),

    /// A schema reference string was rejected.
    #[error("invalid schema reference: {0:?}")]
    InvalidReference(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
