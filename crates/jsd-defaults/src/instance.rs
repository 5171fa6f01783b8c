//! # Instance View
//!
//! The walker never inspects a `serde_json::Value` ad hoc. At each
//! recursion boundary it classifies the value once into [`InstanceMut`]
//! and matches on that exhaustively.
//!
//! [`InstancePath`] tracks where in the instance the walker is, so a
//! shape fault can say exactly which value broke the schema's
//! assumptions.

use serde_json::{Map, Value};

/// Mutable, classified view of one instance value.
#[derive(Debug)]
pub enum InstanceMut<'a> {
    /// JSON `null`; treated like an absent property.
    Null,
    /// Object instance, mutated in place.
    Object(&'a mut Map<String, Value>),
    /// Array instance; traversed element-wise, never resized.
    Array(&'a mut Vec<Value>),
    /// String, number, or boolean; never descended into.
    Scalar(&'a Value),
}

impl<'a> From<&'a mut Value> for InstanceMut<'a> {
    fn from(value: &'a mut Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            scalar => Self::Scalar(scalar),
        }
    }
}

impl InstanceMut<'_> {
    /// Name of the variant, for fault messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Scalar(Value::String(_)) => "string",
            Self::Scalar(Value::Number(_)) => "number",
            Self::Scalar(Value::Bool(_)) => "boolean",
            Self::Scalar(_) => "scalar",
        }
    }
}

/// JSON Pointer (RFC 6901) to a location inside the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath(String);

impl InstancePath {
    /// The instance root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to property `key` below this location.
    pub fn key(&self, key: &str) -> Self {
        let escaped = key.replace('~', "~0").replace('/', "~1");
        Self(format!("{}/{escaped}", self.0))
    }

    /// Path to element `index` below this location.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}/{index}", self.0))
    }

    /// The pointer text; empty for the root.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstancePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}
