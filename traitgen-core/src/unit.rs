//! Generated unit model.
//!
//! A [`GeneratedUnit`] is produced once by [`compile`](crate::compiler::compile)
//! and never mutated afterwards: its fields are only reachable through
//! accessors.

use serde::Serialize;

use crate::docblock::DocBlock;
use crate::imports::ImportSet;
use crate::reflect::{ParameterDescriptor, Visibility};

/// Abstract method republished from a source method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedMethod {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    /// Always `true`: generated methods never carry a body
    pub is_abstract: bool,
    pub returns_reference: bool,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: Option<String>,
    pub doc_block: Option<DocBlock>,
}

/// The trait-like declaration assembled from one source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    name: String,
    namespace: String,
    source_type: String,
    methods: Vec<GeneratedMethod>,
    imports: ImportSet,
}

impl GeneratedUnit {
    pub(crate) fn new(
        name: String,
        namespace: String,
        source_type: String,
        methods: Vec<GeneratedMethod>,
        imports: ImportSet,
    ) -> Self {
        Self {
            name,
            namespace,
            source_type,
            methods,
            imports,
        }
    }

    /// Short unit name, e.g. `MailerTrait`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Containing namespace; empty for the global namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully-qualified unit name.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}\\{}", self.namespace, self.name)
        }
    }

    /// Qualified name of the type the unit was generated from.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    pub fn methods(&self) -> &[GeneratedMethod] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&GeneratedMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }
}
