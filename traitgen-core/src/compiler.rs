//! Compilation of a source type into an abstract-method unit.
//!
//! Two phases, kept apart:
//!
//! - [`compile`]: pure transformation `SourceType -> GeneratedUnit`
//! - [`render`]: `GeneratedUnit -> String` through an [`Emitter`]
//!
//! [`Compiler`] ties them together: construction resolves the source type
//! and compiles eagerly, so a constructed value always holds a finished unit
//! and every later export succeeds.

use tracing::{debug, info};

use crate::emit::{Emitter, PhpEmitter};
use crate::error::TraitgenResult;
use crate::imports::ImportSet;
use crate::naming::derive_unit_name;
use crate::reflect::{SourceType, TypeIntrospector};
use crate::transcribe::{exclusion_reason, transcribe, ExclusionSet};
use crate::unit::GeneratedUnit;

/// Builds the generated unit for `source`.
pub fn compile(source: &SourceType, namespace: &str, exclusions: &ExclusionSet) -> GeneratedUnit {
    let name = derive_unit_name(&source.name);
    let mut imports = ImportSet::new();
    let mut methods = Vec::new();

    for method in source.methods() {
        if let Some(reason) = exclusion_reason(method, exclusions) {
            debug!(source = %source.name, method = %method.name, %reason, "method excluded");
            continue;
        }
        methods.push(transcribe(method, &mut imports));
    }

    info!(
        source = %source.name,
        unit = %name,
        methods = methods.len(),
        imports = imports.len(),
        "compiled unit"
    );

    GeneratedUnit::new(
        name,
        namespace.trim_matches('\\').to_string(),
        source.name.clone(),
        methods,
        imports,
    )
}

/// Renders `unit` with the default PHP emitter.
pub fn render(unit: &GeneratedUnit) -> String {
    PhpEmitter::new().render(unit)
}

/// A compiled source type. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Compiler {
    unit: GeneratedUnit,
}

impl Compiler {
    /// Resolves `source_type` through `introspector` and compiles it.
    ///
    /// `__construct` is always excluded in addition to `blacklist`. Fails with
    /// [`TraitgenError::TypeNotFound`](crate::TraitgenError::TypeNotFound)
    /// when the type cannot be resolved.
    pub fn new<I, S>(
        introspector: &I,
        source_type: &str,
        namespace: &str,
        blacklist: &[S],
    ) -> TraitgenResult<Self>
    where
        I: TypeIntrospector + ?Sized,
        S: AsRef<str>,
    {
        let source = introspector.resolve(source_type)?;
        Ok(Self::from_source(&source, namespace, &ExclusionSet::new(blacklist)))
    }

    /// Compiles an already resolved snapshot.
    pub fn from_source(source: &SourceType, namespace: &str, exclusions: &ExclusionSet) -> Self {
        Self {
            unit: compile(source, namespace, exclusions),
        }
    }

    pub fn unit(&self) -> &GeneratedUnit {
        &self.unit
    }

    /// Renders the unit as PHP trait source. Re-renders on every call.
    pub fn export_as_abstract_methods(&self) -> String {
        render(&self.unit)
    }

    /// Renders the unit with a caller-supplied emitter.
    pub fn export_with<E: Emitter + ?Sized>(&self, emitter: &E) -> String {
        emitter.render(&self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{InMemoryIntrospector, MethodDescriptor, ParameterDescriptor, Visibility};
    use crate::TraitgenError;

    fn mailer() -> SourceType {
        SourceType::new("App\\Service\\Mailer")
            .with_method(MethodDescriptor::new("__construct").with_parameter(ParameterDescriptor::new("transport")))
            .with_method(MethodDescriptor::new("helper").with_visibility(Visibility::Private))
            .with_method(MethodDescriptor::new("util").with_static(true))
            .with_method(
                MethodDescriptor::new("save")
                    .with_parameter(ParameterDescriptor::new("data"))
                    .with_doc_comment("/**\n * @param array $data\n */"),
            )
    }

    #[test]
    fn test_compile_scenario() {
        let unit = compile(&mailer(), "Generated", &ExclusionSet::default());
        assert_eq!(unit.name(), "MailerTrait");
        assert_eq!(unit.namespace(), "Generated");
        assert_eq!(unit.methods().len(), 1);

        let save = unit.method("save").unwrap();
        assert!(save.is_abstract);
        assert_eq!(save.visibility, Visibility::Public);
        assert_eq!(save.parameters[0].name, "data");
        assert!(save.doc_block.is_some());
        assert!(unit.imports().is_empty());
    }

    #[test]
    fn test_blacklist_override() {
        let introspector = InMemoryIntrospector::new().with_type(mailer());
        let compiler = Compiler::new(&introspector, "App\\Service\\Mailer", "Generated", &["save"]).unwrap();
        assert!(compiler.unit().methods().is_empty());
    }

    #[test]
    fn test_unknown_type_fails_construction() {
        let introspector = InMemoryIntrospector::new();
        let err = Compiler::new::<_, &str>(&introspector, "App\\Missing", "Generated", &[]).unwrap_err();
        assert!(matches!(err, TraitgenError::TypeNotFound { ref type_name } if type_name == "App\\Missing"));
    }

    #[test]
    fn test_export_is_repeatable() {
        let introspector = InMemoryIntrospector::new().with_type(mailer());
        let compiler = Compiler::new::<_, &str>(&introspector, "App\\Service\\Mailer", "Generated", &[]).unwrap();
        let first = compiler.export_as_abstract_methods();
        assert_eq!(first, compiler.export_as_abstract_methods());
        assert!(first.contains("abstract public function save($data);"));
        assert!(!first.contains("__construct"));
    }

    #[test]
    fn test_namespace_root_markers_trimmed() {
        let unit = compile(&mailer(), "\\Generated\\", &ExclusionSet::default());
        assert_eq!(unit.namespace(), "Generated");
    }
}
