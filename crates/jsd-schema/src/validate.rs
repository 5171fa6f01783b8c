//! # Post-fill Validation
//!
//! Validates a (typically default-filled) document against a schema in the
//! store using the `jsonschema` crate, Draft 2020-12. Cross-schema `$ref`
//! URIs are resolved from the store only; nothing is fetched over the
//! network.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{SchemaError, ValidationDetail};
use crate::reference::SchemaRef;
use crate::store::{SchemaSource, SchemaStore};

/// Retriever that answers `$ref` lookups from documents already loaded.
struct StoreRetriever {
    /// Map from URI (reference or filename) to schema JSON.
    schemas: HashMap<String, Value>,
}

impl StoreRetriever {
    fn from_store(store: &SchemaStore) -> Self {
        let mut schemas = HashMap::new();
        for (reference, document) in store.documents() {
            schemas.insert(reference.to_string(), document.clone());
        }
        Self { schemas }
    }
}

impl jsonschema::Retrieve for StoreRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        self.schemas
            .get(uri_str)
            .cloned()
            .ok_or_else(|| format!("schema not found for URI: {uri_str}").into())
    }
}

impl SchemaStore {
    /// Validate `value` against the schema registered under `reference`.
    ///
    /// Returns `Ok(())` if the value is valid, or a
    /// [`SchemaError::ValidationFailed`] carrying every violation.
    ///
    /// # Errors
    ///
    /// Also returns [`SchemaError::SchemaNotFound`] for an unknown reference
    /// and [`SchemaError::SchemaCompileError`] if the schema is invalid.
    pub fn validate(&self, value: &Value, reference: &SchemaRef) -> Result<(), SchemaError> {
        let schema = self.resolve_root(reference)?;

        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .with_retriever(StoreRetriever::from_store(self))
            .build(schema)
            .map_err(|e| SchemaError::SchemaCompileError {
                schema_id: reference.to_string(),
                reason: e.to_string(),
            })?;

        let details: Vec<ValidationDetail> = validator
            .iter_errors(value)
            .map(|err| ValidationDetail {
                instance_path: err.instance_path.to_string(),
                schema_path: err.schema_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if details.is_empty() {
            Ok(())
        } else {
            tracing::debug!(%reference, count = details.len(), "document failed validation");
            Err(SchemaError::ValidationFailed {
                schema_id: reference.to_string(),
                count: details.len(),
                details,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn face_store() -> (SchemaStore, SchemaRef) {
        let mut store = SchemaStore::new();
        let reference = store
            .register(json!({
                "type": "object",
                "properties": {
                    "hdri": {"type": "string", "default": "apartment"},
                    "size": {"type": "integer"}
                },
                "required": ["hdri"]
            }))
            .unwrap();
        (store, reference)
    }

    #[test]
    fn valid_document_passes() {
        let (store, reference) = face_store();
        store
            .validate(&json!({"hdri": "apartment", "size": 2}), &reference)
            .unwrap();
    }

    #[test]
    fn invalid_document_reports_every_violation() {
        let (store, reference) = face_store();
        let err = store.validate(&json!({"size": "big"}), &reference).unwrap_err();
        match err {
            SchemaError::ValidationFailed { count, details, .. } => {
                assert_eq!(count, 2);
                assert_eq!(details.len(), 2);
                assert!(details.iter().any(|d| d.instance_path == "/size"));
                assert!(details.iter().any(|d| d.message.contains("hdri")));
            }
            other => panic!("expected ValidationFailed, got: {other}"),
        }
    }

    #[test]
    fn unknown_reference() {
        let (store, _) = face_store();
        let missing = SchemaRef::new("urn:jsd:schema:missing").unwrap();
        assert!(matches!(
            store.validate(&json!({}), &missing),
            Err(SchemaError::SchemaNotFound(_))
        ));
    }

    #[test]
    fn cross_schema_ref_resolves_from_store() {
        let mut store = SchemaStore::new();
        store
            .register(json!({
                "$id": "https://example.org/face.schema.json",
                "type": "object",
                "properties": {"hdri": {"type": "string"}},
                "required": ["hdri"]
            }))
            .unwrap();
        let request = store
            .register(json!({
                "$id": "https://example.org/request.schema.json",
                "type": "object",
                "properties": {
                    "faces": {
                        "type": "array",
                        "items": {"$ref": "https://example.org/face.schema.json"}
                    }
                }
            }))
            .unwrap();

        store
            .validate(&json!({"faces": [{"hdri": "studio"}]}), &request)
            .unwrap();
        assert!(store.validate(&json!({"faces": [{}]}), &request).is_err());
    }

    #[test]
    fn invalid_schema_fails_to_compile() {
        let mut store = SchemaStore::new();
        let reference = store.register(json!({"type": 12})).unwrap();
        assert!(matches!(
            store.validate(&json!({}), &reference),
            Err(SchemaError::SchemaCompileError { .. })
        ));
    }
}
