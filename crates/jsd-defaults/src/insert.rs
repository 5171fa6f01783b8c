//! # Entry Point
//!
//! Resolves the root schema node of a compiled schema document, runs the
//! walker over the instance, and reports any fault as a single
//! [`InsertionError`].
//!
//! The instance is an object, or an array of objects. Objects are
//! mutated in place; if a fault stops the walk, whatever was filled
//! before it stays filled.

use jsd_schema::{SchemaRef, SchemaSource};
use serde_json::Value;

use crate::error::{InsertionError, PartialFill};
use crate::instance::{InstanceMut, InstancePath};
use crate::walker;

/// Handle on one compiled schema document that fills instances from its
/// `default` annotations.
#[derive(Debug)]
pub struct DefaultInserter<'s, S: ?Sized> {
    source: &'s S,
    reference: SchemaRef,
}

impl<'s, S: SchemaSource + ?Sized> DefaultInserter<'s, S> {
    /// Bind to the document registered under `reference` in `source`.
    ///
    /// The reference is resolved on every call, not here.
    pub fn new(source: &'s S, reference: SchemaRef) -> Self {
        Self { source, reference }
    }

    /// The schema document this inserter fills from.
    pub fn reference(&self) -> &SchemaRef {
        &self.reference
    }

    /// Fill `instance` in place.
    ///
    /// # Errors
    ///
    /// - [`InsertionError::NullInstance`] if `instance` is `null`.
    /// - [`InsertionError::Unresolved`] if the document cannot be resolved
    ///   or its root is not a schema object.
    /// - [`InsertionError::Shape`] if the instance or schema breaks a shape
    ///   assumption mid-traversal. Earlier mutations are kept.
    pub fn insert(&self, instance: &mut Value) -> Result<(), InsertionError> {
        let _span = tracing::debug_span!("insert_defaults", schema = %self.reference).entered();

        if instance.is_null() {
            return Err(InsertionError::NullInstance);
        }

        let root = self.source.resolve_root(&self.reference)?;
        let root = root.as_object().ok_or_else(|| {
            jsd_schema::SchemaError::SchemaLoadError {
                path: self.reference.to_string(),
                reason: "schema document root must be an object".to_string(),
            }
        })?;

        walker::insert(root, InstanceMut::from(instance), &InstancePath::root()).map_err(|e| {
            tracing::debug!(error = %e, "default insertion stopped on shape fault");
            InsertionError::from(e)
        })
    }

    /// Fill an owned instance and hand it back.
    ///
    /// # Errors
    ///
    /// On failure the returned [`PartialFill`] carries the error together
    /// with the instance as it stood when insertion stopped.
    pub fn fill(&self, mut instance: Value) -> Result<Value, PartialFill> {
        match self.insert(&mut instance) {
            Ok(()) => Ok(instance),
            Err(error) => Err(PartialFill { instance, error }),
        }
    }
}

/// Fill `instance` in place from the document registered under
/// `reference`.
///
/// Shorthand for [`DefaultInserter::insert`].
pub fn insert_defaults<S: SchemaSource + ?Sized>(
    source: &S,
    reference: &SchemaRef,
    instance: &mut Value,
) -> Result<(), InsertionError> {
    DefaultInserter::new(source, reference.clone()).insert(instance)
}
