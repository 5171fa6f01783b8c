//! # Schema Store
//!
//! Holds compiled (fully resolved, reference-free) schema documents in
//! memory and hands out their root node by [`SchemaRef`].
//!
//! ## Design
//!
//! Consumers never see the store type directly: they depend on the
//! [`SchemaSource`] capability, whose single operation resolves the root
//! schema node of a document. [`SchemaStore`] is the provided
//! implementation. It loads `*.schema.json` / `*.schema.yaml` files from
//! a directory tree, or accepts documents registered in memory, and
//! indexes each under its `$id` (or a derived URN) and its filename.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::document::{parse_document, DocumentFormat};
use crate::error::SchemaError;
use crate::reference::SchemaRef;

/// Resolves the root schema node of a compiled schema document.
pub trait SchemaSource {
    /// Return the root node of the document registered under `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaNotFound`] if nothing is registered
    /// under `reference`.
    fn resolve_root(&self, reference: &SchemaRef) -> Result<&Value, SchemaError>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn resolve_root(&self, reference: &SchemaRef) -> Result<&Value, SchemaError> {
        (**self).resolve_root(reference)
    }
}

/// In-memory registry of schema documents.
#[derive(Default)]
pub struct SchemaStore {
    /// Directory the store was loaded from, if any.
    schema_dir: Option<PathBuf>,
    /// Documents indexed by reference.
    documents: BTreeMap<SchemaRef, Value>,
    /// Schema filename (e.g. `request.schema.json`) to reference.
    filename_to_ref: HashMap<String, SchemaRef>,
    /// Counter for references derived for inline documents.
    inline_count: usize,
}

impl std::fmt::Debug for SchemaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaStore")
            .field("schema_dir", &self.schema_dir)
            .field("schema_count", &self.documents.len())
            .finish()
    }
}

impl SchemaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every schema file under `schema_dir`, recursively.
    ///
    /// Files ending in `.schema.json` are parsed as JSON; files ending in
    /// `.schema.yaml` or `.schema.yml` as YAML. Each document is registered
    /// under its `$id`, or under a reference derived from its path relative
    /// to `schema_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaLoadError`] if the directory cannot be
    /// read or any schema file fails to parse or has a non-object root.
    pub fn load_dir(schema_dir: impl Into<PathBuf>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.into();
        if !schema_dir.is_dir() {
            return Err(SchemaError::SchemaLoadError {
                path: schema_dir.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }

        let mut store = Self {
            schema_dir: Some(schema_dir.clone()),
            ..Self::default()
        };

        for path in glob_schemas(&schema_dir)? {
            let content =
                std::fs::read_to_string(&path).map_err(|e| SchemaError::SchemaLoadError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;

            let origin = path.display().to_string();
            let document = parse_document(&content, DocumentFormat::from_path(&path), &origin)
                .map_err(|e| SchemaError::SchemaLoadError {
                    path: origin.clone(),
                    reason: match e {
                        SchemaError::DocumentLoadError { reason, .. } => reason,
                        other => other.to_string(),
                    },
                })?;

            let reference = match declared_id(&document) {
                Some(id) => SchemaRef::new(id)?,
                None => {
                    let rel = path.strip_prefix(&schema_dir).unwrap_or(&path);
                    SchemaRef::derived(&rel.display().to_string())
                }
            };

            if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
                store
                    .filename_to_ref
                    .insert(filename.to_string(), reference.clone());
            }

            store.insert(reference, document, &origin)?;
        }

        tracing::debug!(
            schema_dir = %schema_dir.display(),
            schema_count = store.len(),
            "loaded schema store"
        );

        Ok(store)
    }

    /// Register an in-memory schema document.
    ///
    /// The document is registered under its `$id` if it declares one,
    /// otherwise under a fresh `urn:jsd:schema:inline/<n>` reference.
    pub fn register(&mut self, document: Value) -> Result<SchemaRef, SchemaError> {
        let reference = match declared_id(&document) {
            Some(id) => SchemaRef::new(id)?,
            None => {
                self.inline_count += 1;
                SchemaRef::derived(&format!("inline/{}", self.inline_count))
            }
        };
        self.insert(reference.clone(), document, "<inline>")?;
        Ok(reference)
    }

    /// Register an in-memory schema document under an explicit reference.
    pub fn register_as(
        &mut self,
        reference: SchemaRef,
        document: Value,
    ) -> Result<(), SchemaError> {
        self.insert(reference, document, "<inline>")
    }

    /// Number of registered schema documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The directory this store was loaded from, if any.
    pub fn schema_dir(&self) -> Option<&Path> {
        self.schema_dir.as_deref()
    }

    /// All registered references, in sorted order.
    pub fn references(&self) -> Vec<&SchemaRef> {
        self.documents.keys().collect()
    }

    /// Look up a document by reference.
    pub fn get(&self, reference: &SchemaRef) -> Option<&Value> {
        self.documents.get(reference)
    }

    /// Look up a document by its filename (e.g. `request.schema.json`).
    pub fn get_by_filename(&self, filename: &str) -> Option<&Value> {
        self.filename_to_ref
            .get(filename)
            .and_then(|r| self.documents.get(r))
    }

    /// Resolve a user-supplied name to a registered reference.
    ///
    /// Tries `name` as a reference first, then as a schema filename.
    pub fn lookup(&self, name: &str) -> Result<SchemaRef, SchemaError> {
        let reference = SchemaRef::new(name)?;
        if self.documents.contains_key(&reference) {
            return Ok(reference);
        }
        self.filename_to_ref
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::SchemaNotFound(name.to_string()))
    }

    pub(crate) fn documents(&self) -> &BTreeMap<SchemaRef, Value> {
        &self.documents
    }

    fn insert(
        &mut self,
        reference: SchemaRef,
        document: Value,
        origin: &str,
    ) -> Result<(), SchemaError> {
        if !document.is_object() {
            return Err(SchemaError::SchemaLoadError {
                path: origin.to_string(),
                reason: "schema document root must be an object".to_string(),
            });
        }
        if self.documents.insert(reference.clone(), document).is_some() {
            tracing::warn!(%reference, origin, "schema reference registered twice; replacing");
        }
        Ok(())
    }
}

impl SchemaSource for SchemaStore {
    fn resolve_root(&self, reference: &SchemaRef) -> Result<&Value, SchemaError> {
        self.documents
            .get(reference)
            .ok_or_else(|| SchemaError::SchemaNotFound(reference.to_string()))
    }
}

fn declared_id(document: &Value) -> Option<&str> {
    document.get("$id").and_then(Value::as_str)
}

fn is_schema_file(name: &str) -> bool {
    name.ends_with(".schema.json") || name.ends_with(".schema.yaml") || name.ends_with(".schema.yml")
}

/// Recursively collect schema file paths, sorted.
fn glob_schemas(dir: &Path) -> Result<Vec<PathBuf>, SchemaError> {
    let mut results = Vec::new();
    walk_for_schemas(dir, &mut results)?;
    results.sort();
    Ok(results)
}

fn walk_for_schemas(dir: &Path, acc: &mut Vec<PathBuf>) -> Result<(), SchemaError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_for_schemas(&path, acc)?;
        } else if path
            .file_name()
            .and_then(|f| f.to_str())
            .is_some_and(is_schema_file)
        {
            acc.push(path);
        }
    }
    Ok(())
}
