//! Reflection contract consumed by the compiler.
//!
//! The compiler never looks at source text or a live runtime directly. It asks
//! a [`TypeIntrospector`] for a [`SourceType`] snapshot and works from the
//! ordered [`MethodDescriptor`]s it exposes.
//!
//! Two backends ship with the crate:
//!
//! - [`InMemoryIntrospector`]: descriptors held in memory, optionally loaded
//!   from a JSON dump produced by a runtime reflection exporter.
//! - [`PhpSourceIntrospector`] (feature `php-source`): a static-analysis reader
//!   that lexes `*.php` files and reconstructs the same descriptors.

pub mod memory;
#[cfg(feature = "php-source")]
pub mod php;

pub use memory::InMemoryIntrospector;
#[cfg(feature = "php-source")]
pub use php::PhpSourceIntrospector;

use serde::{Deserialize, Serialize};

use crate::error::TraitgenResult;

/// Capability contract: resolve a type identifier to a read-only snapshot.
pub trait TypeIntrospector {
    /// Resolves `type_name` to its structural metadata.
    ///
    /// Fails with [`TraitgenError::TypeNotFound`](crate::TraitgenError::TypeNotFound)
    /// when the identifier does not denote a reflectable type.
    fn resolve(&self, type_name: &str) -> TraitgenResult<SourceType>;
}

/// Method visibility as declared in the source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Keyword used in emitted source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formal parameter of a reflected method.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDescriptor {
    /// Parameter name without the leading `$`
    pub name: String,
    /// Declared type hint, verbatim (e.g. `?array`, `int|string`)
    pub type_hint: Option<String>,
    /// Default value expression, verbatim source text
    pub default_value: Option<String>,
    pub variadic: bool,
    pub by_reference: bool,
}

impl ParameterDescriptor {
    /// Creates an untyped, required parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }
}

/// One reflected method of a source type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub returns_reference: bool,
    pub parameters: Vec<ParameterDescriptor>,
    /// Declared return type, verbatim
    pub return_type: Option<String>,
    /// Raw `/** ... */` documentation comment, if any
    pub doc_comment: Option<String>,
    /// Text between the body braces; `None` for abstract/interface methods
    pub body: Option<String>,
}

impl MethodDescriptor {
    /// Creates a public, concrete method with a placeholder body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Some("return null;".to_string()),
            ..Self::default()
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_doc_comment(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// Whether the method has a retrievable, non-blank body.
    ///
    /// An empty `{}` block counts as no body.
    pub fn has_body(&self) -> bool {
        self.body.as_deref().is_some_and(|b| !b.trim().is_empty())
    }
}

/// Kind of declaration a source type came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Trait,
    Interface,
}

/// Read-only snapshot of a reflected type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceType {
    /// Fully-qualified name without a leading root separator
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Methods in reflection order
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl SourceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Ordered sequence of method descriptors.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }
}

/// Canonical lookup key for a type identifier: no root separator, lowercase.
pub(crate) fn type_key(type_name: &str) -> String {
    type_name.trim().trim_start_matches('\\').to_ascii_lowercase()
}
