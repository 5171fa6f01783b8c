//! # Error Types
//!
//! Default insertion has one failure kind, "insertion failed"
//! ([`InsertionError`]). Its variants record why: a null instance, a
//! schema document that cannot be resolved, or a shape fault met
//! mid-traversal ([`ShapeError`]).
//!
//! Faults are ordinary values. The walker returns them from every
//! recursive call and the entry point wraps them; nothing unwinds.

use jsd_schema::SchemaError;
use serde_json::Value;
use thiserror::Error;

use crate::instance::InstancePath;

/// An instance or schema node did not have the shape the walker expected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// An object-typed node met a value that is not an object.
    #[error("expected object at {path}, found {found}")]
    ExpectedObject {
        /// Location in the instance.
        path: InstancePath,
        /// Kind of value actually found.
        found: &'static str,
    },

    /// An array-typed node met a value that is not an array.
    #[error("expected array at {path}, found {found}")]
    ExpectedArray {
        /// Location in the instance.
        path: InstancePath,
        /// Kind of value actually found.
        found: &'static str,
    },

    /// A schema node lacks a keyword its type requires.
    #[error("schema node for {path} is missing required keyword '{keyword}'")]
    MissingKeyword {
        /// Location in the instance the node describes.
        path: InstancePath,
        /// The missing keyword.
        keyword: &'static str,
    },

    /// A schema keyword holds a value of the wrong JSON type.
    #[error("schema keyword '{keyword}' for {path} must be {expected}")]
    InvalidKeyword {
        /// Location in the instance the node describes.
        path: InstancePath,
        /// The offending keyword.
        keyword: &'static str,
        /// What the keyword must hold.
        expected: &'static str,
    },
}

/// Default insertion failed.
#[derive(Error, Debug)]
pub enum InsertionError {
    /// The instance argument was `null`.
    #[error("insertion failed: instance must not be null")]
    NullInstance,

    /// The compiled schema document could not be resolved.
    #[error("insertion failed: cannot resolve schema document: {0}")]
    Unresolved(#[from] SchemaError),

    /// A shape assumption was violated mid-traversal.
    #[error("insertion failed: {0}")]
    Shape(#[from] ShapeError),
}

/// Insertion failed after the instance may already have been modified.
///
/// Mutations applied before the fault are not rolled back; `instance`
/// holds the document as it stood when the fault occurred.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct PartialFill {
    /// The partially filled instance.
    pub instance: Value,
    /// Why insertion stopped.
    #[source]
    pub error: InsertionError,
}

impl PartialFill {
    /// Split into the partially filled instance and the error.
    pub fn into_parts(self) -> (Value, InsertionError) {
        (self.instance, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_display_includes_path() {
        let err = ShapeError::ExpectedObject {
            path: InstancePath::root().key("faces").index(1),
            found: "string",
        };
        assert_eq!(err.to_string(), "expected object at /faces/1, found string");
    }

    #[test]
    fn missing_keyword_display_at_root() {
        let err = ShapeError::MissingKeyword {
            path: InstancePath::root(),
            keyword: "properties",
        };
        assert_eq!(
            err.to_string(),
            "schema node for (root) is missing required keyword 'properties'"
        );
    }

    #[test]
    fn every_insertion_error_reads_as_insertion_failed() {
        let errors = [
            InsertionError::NullInstance,
            InsertionError::Unresolved(SchemaError::SchemaNotFound("x".to_string())),
            InsertionError::Shape(ShapeError::ExpectedArray {
                path: InstancePath::root(),
                found: "object",
            }),
        ];
        for err in &errors {
            assert!(err.to_string().starts_with("insertion failed: "), "{err}");
        }
    }

    #[test]
    fn partial_fill_displays_inner_error() {
        let partial = PartialFill {
            instance: serde_json::json!({"a": 1}),
            error: InsertionError::NullInstance,
        };
        assert_eq!(partial.to_string(), "insertion failed: instance must not be null");
        let (instance, error) = partial.into_parts();
        assert_eq!(instance["a"], 1);
        assert!(matches!(error, InsertionError::NullInstance));
    }
}
