//! # Type Resolution
//!
//! Reduces a schema node's `type` keyword to the structural type that
//! decides how the walker recurses.
//!
//! A bare string resolves to itself. A list (a nullable union such as
//! `["object", "null"]`) resolves only to `object` or `array`, in that
//! order of preference; a union of a scalar type with `null`, such as
//! `["string", "null"]`, does not resolve at all. Default insertion for
//! such a leaf still happens through its parent, which reads `default`
//! without consulting the leaf's type.

use serde_json::Value;

/// Type name for object nodes.
pub const OBJECT: &str = "object";
/// Type name for array nodes.
pub const ARRAY: &str = "array";

/// Structural type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedType<'a> {
    /// `"object"`: recurse into `properties`.
    Object,
    /// `"array"`: recurse into each element with `items`.
    Array,
    /// Any other single type name (`"string"`, `"integer"`, ...).
    Other(&'a str),
}

impl<'a> ResolvedType<'a> {
    /// The JSON Schema type name this resolves to.
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Object => OBJECT,
            Self::Array => ARRAY,
            Self::Other(name) => name,
        }
    }
}

/// Resolve the raw value of a node's `type` keyword.
///
/// Returns `None` when the keyword is absent, is not a string or list, or
/// is a list containing neither `"object"` nor `"array"`.
pub fn resolve_type(raw: Option<&Value>) -> Option<ResolvedType<'_>> {
    match raw? {
        Value::String(name) => Some(match name.as_str() {
            OBJECT => ResolvedType::Object,
            ARRAY => ResolvedType::Array,
            other => ResolvedType::Other(other),
        }),
        Value::Array(union) => {
            let contains = |wanted: &str| union.iter().any(|t| t.as_str() == Some(wanted));
            if contains(OBJECT) {
                Some(ResolvedType::Object)
            } else if contains(ARRAY) {
                Some(ResolvedType::Array)
            } else {
                None
            }
        }
        _ => None,
    }
}
