//! # jsd-schema: Schema Store
//!
//! Supplies compiled JSON Schema documents to the rest of the workspace.
//!
//! ## Lookup (`store`)
//!
//! [`SchemaSource`] is the one capability consumers depend on: resolve the
//! root schema node of a document by [`SchemaRef`]. [`SchemaStore`] is the
//! provided implementation, loaded from a directory of `*.schema.json` /
//! `*.schema.yaml` files or from documents registered in memory.
//!
//! ## Documents (`document`)
//!
//! JSON/YAML instance loading and rendering, chosen by file extension.
//!
//! ## Validation (`validate`)
//!
//! [`SchemaStore::validate`] checks a filled document against its schema
//! with the `jsonschema` crate, resolving `$ref` URIs from the store only.
//!
//! ## Crate Policy
//!
//! - Depends on no other `jsd-*` crate.
//! - Documents are held as already-resolved `serde_json::Value` trees;
//!   this crate does not rewrite or dereference `$ref` in stored schemas.

pub mod document;
pub mod error;
pub mod reference;
pub mod store;
pub mod validate;

pub use document::{load_document, parse_document, render_document, DocumentFormat};
pub use error::{SchemaError, ValidationDetail};
pub use reference::SchemaRef;
pub use store::{SchemaSource, SchemaStore};
