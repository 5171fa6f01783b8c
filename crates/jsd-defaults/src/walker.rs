//! # Default-Insertion Walker
//!
//! Recursively matches a schema node against an instance value and fills
//! absent or `null` properties from `default` annotations.
//!
//! ## Rules
//!
//! - A present, non-null value always wins. It is only descended into
//!   (objects, and arrays whose `items` resolve to `object`), never
//!   replaced.
//! - An absent or `null` property takes its sub-schema's `default`. With
//!   no `default`, an object-typed sub-schema is filled into a fresh
//!   object, which is kept only if something landed in it.
//! - A node carrying `oneOf` is opaque: its properties are never
//!   enumerated. Its own `default` is applied by its parent.
//! - Each property's outcome depends only on its sub-schema and its
//!   current value, so property order does not affect the result.

use serde_json::{Map, Value};

use crate::error::ShapeError;
use crate::instance::{InstanceMut, InstancePath};
use crate::types::{resolve_type, ResolvedType};

/// `type` keyword.
pub const TYPE: &str = "type";
/// `properties` keyword.
pub const PROPERTIES: &str = "properties";
/// `items` keyword.
pub const ITEMS: &str = "items";
/// `default` keyword.
pub const DEFAULT: &str = "default";
/// `oneOf` keyword (presence only).
pub const ONE_OF: &str = "oneOf";

/// A schema node: mapping of keyword to value.
pub type SchemaNode = Map<String, Value>;

/// Insert defaults from `node` into `instance`.
///
/// Nodes whose type does not resolve, or resolves to a scalar type, are a
/// no-op.
pub fn insert(
    node: &SchemaNode,
    instance: InstanceMut<'_>,
    path: &InstancePath,
) -> Result<(), ShapeError> {
    match resolve_type(node.get(TYPE)) {
        Some(ResolvedType::Object) => match instance {
            InstanceMut::Object(object) => fill_object(node, object, path),
            other => Err(ShapeError::ExpectedObject {
                path: path.clone(),
                found: other.kind(),
            }),
        },
        Some(ResolvedType::Array) => match instance {
            InstanceMut::Array(elements) => fill_array(node, elements, path),
            other => Err(ShapeError::ExpectedArray {
                path: path.clone(),
                found: other.kind(),
            }),
        },
        Some(ResolvedType::Other(_)) | None => Ok(()),
    }
}

fn fill_array(
    node: &SchemaNode,
    elements: &mut [Value],
    path: &InstancePath,
) -> Result<(), ShapeError> {
    let items = keyword_node(node, ITEMS, path)?.ok_or_else(|| ShapeError::MissingKeyword {
        path: path.clone(),
        keyword: ITEMS,
    })?;

    // Arrays of non-object items are returned as they are.
    if resolve_type(items.get(TYPE)) != Some(ResolvedType::Object) {
        return Ok(());
    }

    for (index, element) in elements.iter_mut().enumerate() {
        let here = path.index(index);
        match InstanceMut::from(element) {
            InstanceMut::Object(object) => fill_object(items, object, &here)?,
            other => {
                return Err(ShapeError::ExpectedObject {
                    path: here,
                    found: other.kind(),
                })
            }
        }
    }
    Ok(())
}

fn fill_object(
    node: &SchemaNode,
    object: &mut Map<String, Value>,
    path: &InstancePath,
) -> Result<(), ShapeError> {
    if node.contains_key(ONE_OF) {
        return Ok(());
    }

    let properties = match node.get(PROPERTIES) {
        Some(Value::Object(properties)) => properties,
        Some(_) => {
            return Err(ShapeError::InvalidKeyword {
                path: path.clone(),
                keyword: PROPERTIES,
                expected: "an object",
            })
        }
        None => {
            return Err(ShapeError::MissingKeyword {
                path: path.clone(),
                keyword: PROPERTIES,
            })
        }
    };

    for (name, sub_schema) in properties {
        let here = path.key(name);
        let sub_schema = sub_schema
            .as_object()
            .ok_or_else(|| ShapeError::InvalidKeyword {
                path: here.clone(),
                keyword: PROPERTIES,
                expected: "a mapping of property names to schema objects",
            })?;

        let vacant = match object.get_mut(name).map(InstanceMut::from) {
            None | Some(InstanceMut::Null) => true,
            Some(InstanceMut::Object(child)) => {
                insert(sub_schema, InstanceMut::Object(child), &here)?;
                false
            }
            Some(InstanceMut::Array(elements)) => {
                if items_are_objects(sub_schema, &here)? {
                    insert(sub_schema, InstanceMut::Array(elements), &here)?;
                }
                false
            }
            Some(InstanceMut::Scalar(_)) => false,
        };
        if !vacant {
            continue;
        }

        if let Some(default) = sub_schema.get(DEFAULT) {
            tracing::trace!(path = %here, "applying schema default");
            object.insert(name.clone(), default.clone());
        } else if resolve_type(sub_schema.get(TYPE)) == Some(ResolvedType::Object) {
            let mut fresh = Map::new();
            fill_object(sub_schema, &mut fresh, &here)?;
            if !fresh.is_empty() {
                tracing::trace!(path = %here, "materialized object from nested defaults");
                object.insert(name.clone(), Value::Object(fresh));
            }
        }
    }
    Ok(())
}

/// Whether `node.items` is present and resolves to `object`.
fn items_are_objects(node: &SchemaNode, path: &InstancePath) -> Result<bool, ShapeError> {
    Ok(keyword_node(node, ITEMS, path)?
        .is_some_and(|items| resolve_type(items.get(TYPE)) == Some(ResolvedType::Object)))
}

/// Fetch a keyword whose value must itself be a schema node.
fn keyword_node<'s>(
    node: &'s SchemaNode,
    keyword: &'static str,
    path: &InstancePath,
) -> Result<Option<&'s SchemaNode>, ShapeError> {
    match node.get(keyword) {
        None => Ok(None),
        Some(Value::Object(sub)) => Ok(Some(sub)),
        Some(_) => Err(ShapeError::InvalidKeyword {
            path: path.clone(),
            keyword,
            expected: "a schema object",
        }),
    }
}
