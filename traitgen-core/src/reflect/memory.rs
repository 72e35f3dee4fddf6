//! In-memory reflection backend.
//!
//! Holds [`SourceType`] snapshots keyed by their canonical name. Snapshots can
//! be registered programmatically or loaded from a JSON dump, which is how a
//! runtime reflection exporter running inside PHP hands its data over.

use std::collections::HashMap;
use std::path::Path;

use super::{type_key, SourceType, TypeIntrospector};
use crate::error::{IoResultExt, TraitgenError, TraitgenResult};

/// Introspector over pre-built descriptors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIntrospector {
    types: HashMap<String, SourceType>,
}

impl InMemoryIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type, replacing any previous snapshot with the same name.
    pub fn with_type(mut self, source: SourceType) -> Self {
        self.insert(source);
        self
    }

    pub fn insert(&mut self, source: SourceType) {
        self.types.insert(type_key(&source.name), source);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Parses a JSON array of [`SourceType`] objects.
    pub fn from_json(json: &str) -> TraitgenResult<Self> {
        let types: Vec<SourceType> = serde_json::from_str(json)
            .map_err(|e| TraitgenError::metadata(format!("invalid descriptor dump: {}", e)))?;

        let mut introspector = Self::new();
        for source in types {
            if source.name.trim().is_empty() {
                return Err(TraitgenError::metadata("type descriptor without a name"));
            }
            introspector.insert(source);
        }
        Ok(introspector)
    }

    /// Reads a JSON descriptor dump from disk.
    pub fn from_json_file(path: &Path) -> TraitgenResult<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        Self::from_json(&content)
    }
}

impl TypeIntrospector for InMemoryIntrospector {
    fn resolve(&self, type_name: &str) -> TraitgenResult<SourceType> {
        self.types
            .get(&type_key(type_name))
            .cloned()
            .ok_or_else(|| TraitgenError::type_not_found(type_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{MethodDescriptor, Visibility};

    #[test]
    fn test_resolve_registered_type() {
        let introspector = InMemoryIntrospector::new()
            .with_type(SourceType::new("App\\Service\\Mailer").with_method(MethodDescriptor::new("send")));

        let source = introspector.resolve("\\app\\service\\MAILER").unwrap();
        assert_eq!(source.name, "App\\Service\\Mailer");
        assert_eq!(source.methods().len(), 1);
    }

    #[test]
    fn test_resolve_unknown_type_fails() {
        let introspector = InMemoryIntrospector::new();
        let err = introspector.resolve("Nope").unwrap_err();
        assert_eq!(err.type_name(), Some("Nope"));
    }

    #[test]
    fn test_from_json_dump() {
        let json = r#"[
            {
                "name": "Legacy_Db_Connection",
                "methods": [
                    {"name": "query", "visibility": "public", "body": "return 1;",
                     "parameters": [{"name": "sql", "type_hint": "string"}]},
                    {"name": "reset", "visibility": "private", "body": "x();"}
                ]
            }
        ]"#;
        let introspector = InMemoryIntrospector::from_json(json).unwrap();
        assert_eq!(introspector.len(), 1);

        let source = introspector.resolve("Legacy_Db_Connection").unwrap();
        assert_eq!(source.methods()[0].parameters[0].type_hint.as_deref(), Some("string"));
        assert_eq!(source.methods()[1].visibility, Visibility::Private);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            InMemoryIntrospector::from_json("{not json"),
            Err(TraitgenError::Metadata { .. })
        ));
        assert!(matches!(
            InMemoryIntrospector::from_json(r#"[{"name": ""}]"#),
            Err(TraitgenError::Metadata { .. })
        ));
    }
}
