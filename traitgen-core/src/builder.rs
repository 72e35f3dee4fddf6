//! Builder pattern API for trait generation.
//!
//! Provides a fluent interface for configuring a compilation:
//!
//! ```rust,ignore
//! use traitgen_core::prelude::*;
//!
//! let introspector = PhpSourceIntrospector::from_paths(&["src"])?;
//! let compiler = Traitgen::new("App\\Service\\Mailer")
//!     .namespace("Generated")
//!     .blacklist(["setUp", "tearDown"])
//!     .compile(&introspector)?;
//!
//! println!("{}", compiler.export_as_abstract_methods());
//! ```

use crate::compiler::Compiler;
use crate::config::TraitgenConfig;
use crate::error::{TraitgenError, TraitgenResult};
use crate::reflect::TypeIntrospector;
use crate::transcribe::ExclusionSet;

/// Builder for configuring one compilation.
#[derive(Debug, Clone)]
pub struct Traitgen {
    /// Qualified name of the source type
    source_type: String,

    /// Namespace of the generated unit
    namespace: String,

    /// Method names excluded on top of the constructor
    blacklist: Vec<String>,
}

impl Traitgen {
    /// Create a new builder for the given source type.
    pub fn new(source_type: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            namespace: String::new(),
            blacklist: Vec::new(),
        }
    }

    /// Set the namespace of the generated unit.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add method names to exclude.
    pub fn blacklist(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.blacklist.extend(names.into_iter().map(Into::into));
        self
    }

    /// Apply defaults from a loaded configuration.
    ///
    /// The namespace is taken only if none was set; blacklists are merged.
    pub fn with_config(mut self, config: &TraitgenConfig) -> Self {
        if self.namespace.is_empty() {
            if let Some(namespace) = &config.namespace {
                self.namespace = namespace.clone();
            }
        }
        if let Some(blacklist) = &config.blacklist {
            self.blacklist.extend(blacklist.iter().cloned());
        }
        self
    }

    /// The exclusion set this builder will compile with.
    pub fn exclusions(&self) -> ExclusionSet {
        ExclusionSet::new(&self.blacklist)
    }

    /// Resolve the source type and compile it.
    pub fn compile<I: TypeIntrospector + ?Sized>(&self, introspector: &I) -> TraitgenResult<Compiler> {
        if self.source_type.trim().trim_start_matches('\\').is_empty() {
            return Err(TraitgenError::invalid_argument("source type name is empty"));
        }
        let source = introspector.resolve(&self.source_type)?;
        Ok(Compiler::from_source(&source, &self.namespace, &self.exclusions()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{InMemoryIntrospector, MethodDescriptor, SourceType};

    fn introspector() -> InMemoryIntrospector {
        InMemoryIntrospector::new().with_type(
            SourceType::new("Legacy_Db_Connection")
                .with_method(MethodDescriptor::new("query"))
                .with_method(MethodDescriptor::new("close"))
                .with_method(MethodDescriptor::new("setUp")),
        )
    }

    #[test]
    fn test_builder_compiles() {
        let compiler = Traitgen::new("Legacy_Db_Connection")
            .namespace("Generated\\Db")
            .blacklist(["close"])
            .compile(&introspector())
            .unwrap();
        assert_eq!(compiler.unit().qualified_name(), "Generated\\Db\\ConnectionTrait");
        let names: Vec<_> = compiler.unit().methods().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["query", "setUp"]);
    }

    #[test]
    fn test_config_defaults_merge() {
        let config = TraitgenConfig {
            namespace: Some("FromConfig".to_string()),
            blacklist: Some(vec!["setUp".to_string()]),
            ..TraitgenConfig::default()
        };

        let builder = Traitgen::new("Legacy_Db_Connection")
            .blacklist(["close"])
            .with_config(&config);
        let compiler = builder.compile(&introspector()).unwrap();
        assert_eq!(compiler.unit().namespace(), "FromConfig");
        assert_eq!(compiler.unit().methods().len(), 1);

        let explicit = Traitgen::new("Legacy_Db_Connection")
            .namespace("Explicit")
            .with_config(&config);
        assert_eq!(explicit.compile(&introspector()).unwrap().unit().namespace(), "Explicit");
    }

    #[test]
    fn test_empty_source_type_rejected() {
        let err = Traitgen::new("\\").compile(&introspector()).unwrap_err();
        assert!(matches!(err, TraitgenError::InvalidArgument { .. }));
    }
}
