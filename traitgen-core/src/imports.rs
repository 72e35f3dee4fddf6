//! Type-reference resolution for documentation blocks.
//!
//! Every type token written in a typeable tag (`@param`, `@return`,
//! `@property`, `@var`, `@throws`) becomes an import of the generated unit
//! unless it is:
//! - rooted at the global namespace (`\Foo\Bar` resolves without an import)
//! - a built-in or pseudo type (`int`, `string[]`, `$this`, ...)
//!
//! Unknown shapes are imported as written: a superfluous import is harmless,
//! a missing one breaks the generated docs.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use crate::docblock::DocBlock;

/// Built-in and pseudo types, compared lowercase after bracket stripping.
pub const BUILTIN_TYPES: &[&str] = &[
    "$this", "array", "bool", "boolean", "callable", "false", "float", "int", "integer", "mixed",
    "null", "object", "resource", "self", "static", "string", "true", "void",
];

/// Set of imported type references; duplicates collapse, iteration is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ImportSet(BTreeSet<String>);

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type reference; returns `false` if it was already present.
    pub fn insert(&mut self, type_ref: impl Into<String>) -> bool {
        self.0.insert(type_ref.into())
    }

    pub fn contains(&self, type_ref: &str) -> bool {
        self.0.contains(type_ref)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Whether a type token is rooted at the global namespace.
pub fn is_globally_rooted(type_token: &str) -> bool {
    type_token.starts_with('\\')
}

/// Whether a type token names a built-in or pseudo type.
///
/// Leading and trailing brackets (`int[]`, `[]string`) are stripped first.
pub fn is_builtin_type(type_token: &str) -> bool {
    let normalized = type_token
        .trim_matches(|c| c == '[' || c == ']')
        .to_ascii_lowercase();
    BUILTIN_TYPES.contains(&normalized.as_str())
}

/// Whether a type token needs an import in the generated unit.
pub fn needs_import(type_token: &str) -> bool {
    !type_token.is_empty() && !is_globally_rooted(type_token) && !is_builtin_type(type_token)
}

/// Registers every importable type referenced by `doc`'s typeable tags.
pub fn import_types_in_doc_block(doc: &DocBlock, imports: &mut ImportSet) {
    for tag in doc.typeable_tags() {
        for type_token in tag.types() {
            if needs_import(type_token) && imports.insert(type_token) {
                trace!(tag = %tag.name, import = %type_token, "registered import");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imports_for(raw: &str) -> Vec<String> {
        let mut imports = ImportSet::new();
        import_types_in_doc_block(&DocBlock::parse(raw), &mut imports);
        imports.iter().map(str::to_string).collect()
    }

    #[test]
    fn test_builtin_tokens_case_insensitive_and_bracket_stripped() {
        for token in ["int", "INTEGER", "string[]", "Bool", "$this", "static", "void", "[]mixed", "NULL"] {
            assert!(is_builtin_type(token), "{}", token);
        }
        for token in ["User", "App\\Model\\User", "Collection<int>", "?int", "double"] {
            assert!(!is_builtin_type(token), "{}", token);
        }
    }

    #[test]
    fn test_globally_rooted_not_imported() {
        assert!(imports_for("/** @return \\App\\Model\\User */").is_empty());
    }

    #[test]
    fn test_relative_reference_imported_raw() {
        assert_eq!(imports_for("/** @return App\\Model\\User */"), vec!["App\\Model\\User"]);
        assert_eq!(imports_for("/** @param User[] $users */"), vec!["User[]"]);
    }

    #[test]
    fn test_union_types_and_all_typeable_tags() {
        let imports = imports_for(
            r#"/**
 * @param Request|null $request
 * @property-read Clock $clock
 * @var Cache
 * @throws NotFound|\RuntimeException
 * @return Response|string
 * @see Ignored
 * @uses AlsoIgnored
 */"#,
        );
        assert_eq!(imports, vec!["Cache", "Clock", "NotFound", "Request", "Response"]);
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut imports = ImportSet::new();
        let doc = DocBlock::parse("/**\n * @param User $a\n * @param User $b\n * @return User\n */");
        import_types_in_doc_block(&doc, &mut imports);
        import_types_in_doc_block(&doc, &mut imports);
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("User"));
    }

    #[test]
    fn test_nullable_and_generic_shapes_import_the_name() {
        let imports = imports_for(
            r#"/**
 * @param Collection<int, User> $items
 * @param array<int, Order> $orders
 * @return ?Entity
 * @method static Builder|null query()
 */"#,
        );
        assert_eq!(imports, vec!["Builder", "Collection", "Entity"]);
        assert!(imports.iter().all(|i| !i.contains(['<', '?', ','])));
    }

    #[test]
    fn test_untyped_param_contributes_nothing() {
        assert!(imports_for("/** @param $data */").is_empty());
    }
}
