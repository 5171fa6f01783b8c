//! # Schema References
//!
//! A [`SchemaRef`] names one schema document held by a store. It is the
//! document's `$id` URI when the schema declares one, otherwise a
//! `urn:jsd:schema:` URN derived from where the document came from.
//!
//! Keeping references in a newtype prevents a schema filename, an
//! instance path, and a schema URI from being passed for one another.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// URN prefix for schemas registered without an `$id`.
pub const DERIVED_REF_PREFIX: &str = "urn:jsd:schema:";

/// Identifier of a schema document in a [`SchemaSource`](crate::SchemaSource).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRef(String);

impl SchemaRef {
    /// Create a reference from a `$id` URI or any other non-blank name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReference`] if `reference` is empty or
    /// contains only whitespace.
    pub fn new(reference: impl Into<String>) -> Result<Self, SchemaError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(SchemaError::InvalidReference(reference));
        }
        Ok(Self(reference))
    }

    /// Derive a reference for a schema without `$id` from its relative
    /// location (path separators are normalized to `/`).
    pub fn derived(relative: &str) -> Self {
        let normalized = relative.replace('\\', "/");
        Self(format!("{DERIVED_REF_PREFIX}{normalized}"))
    }

    /// The reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference was derived rather than declared via `$id`.
    pub fn is_derived(&self) -> bool {
        self.0.starts_with(DERIVED_REF_PREFIX)
    }
}

impl std::fmt::Display for SchemaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SchemaRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SchemaRef {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
