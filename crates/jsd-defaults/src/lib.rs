//! # jsd-defaults: Schema Default Insertion
//!
//! Fills missing fields of a JSON instance from the `default` annotations
//! of a compiled JSON Schema document, recursing through nested objects
//! and arrays of objects. Used to normalize partial inbound payloads
//! before further processing or validation.
//!
//! ```
//! use jsd_defaults::insert_defaults;
//! use jsd_schema::SchemaStore;
//! use serde_json::json;
//!
//! let mut store = SchemaStore::new();
//! let reference = store
//!     .register(json!({
//!         "type": "object",
//!         "properties": {"testkey": {"default": "defaultvalue"}}
//!     }))
//!     .unwrap();
//!
//! let mut instance = json!({});
//! insert_defaults(&store, &reference, &mut instance).unwrap();
//! assert_eq!(instance, json!({"testkey": "defaultvalue"}));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: reduces a node's `type` (name or nullable union) to its
//!   structural type.
//! - [`instance`]: classified, mutable view of instance values and the
//!   JSON Pointer used in fault messages.
//! - [`walker`]: the recursive insertion algorithm.
//! - [`insert`]: entry point: root lookup, null check, fault reporting.
//!
//! ## Guarantees
//!
//! - Non-null values already present are never overwritten.
//! - Running insertion twice gives the same result as running it once.
//! - Arrays are never resized; an empty array stays empty.
//!
//! ## Crate Policy
//!
//! - Schema documents come from a [`jsd_schema::SchemaSource`]; this crate
//!   never loads, compiles, or dereferences schemas itself.
//! - Single-threaded and synchronous. Concurrent calls on the same
//!   instance must be serialized by the caller.

pub mod error;
pub mod insert;
pub mod instance;
pub mod types;
pub mod walker;

pub use error::{InsertionError, PartialFill, ShapeError};
pub use insert::{insert_defaults, DefaultInserter};
pub use instance::{InstanceMut, InstancePath};
pub use types::{resolve_type, ResolvedType};
