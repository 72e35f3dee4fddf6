//! Method transcription: decide whether a reflected method is republished,
//! and if so build its abstract counterpart.
//!
//! Exclusion rules, evaluated in order (first match wins):
//! 1. private visibility
//! 2. static
//! 3. name in the exclusion set (`__construct` plus caller-supplied names)
//! 4. no retrievable body (abstract or interface-only methods)

use serde::Serialize;
use std::fmt;

use crate::docblock::DocBlock;
use crate::imports::{import_types_in_doc_block, ImportSet};
use crate::reflect::{MethodDescriptor, Visibility};
use crate::unit::GeneratedMethod;

/// Initializer name that is excluded regardless of the caller's blacklist.
pub const CONSTRUCTOR_NAME: &str = "__construct";

/// Method names never transcribed. Membership is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            names: vec![CONSTRUCTOR_NAME.to_string()],
        }
    }
}

impl ExclusionSet {
    /// The constructor entry followed by `blacklist`, duplicates dropped.
    pub fn new<S: AsRef<str>>(blacklist: &[S]) -> Self {
        let mut set = Self::default();
        for name in blacklist {
            set.add(name.as_ref());
        }
        set
    }

    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Why a reflected method was not transcribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    Private,
    Static,
    Blacklisted,
    NoBody,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Private => "private method",
            Self::Static => "static method",
            Self::Blacklisted => "blacklisted name",
            Self::NoBody => "no body",
        })
    }
}

/// Applies the exclusion policy; `None` means the method is transcribed.
pub fn exclusion_reason(method: &MethodDescriptor, exclusions: &ExclusionSet) -> Option<ExclusionReason> {
    if method.visibility == Visibility::Private {
        Some(ExclusionReason::Private)
    } else if method.is_static {
        Some(ExclusionReason::Static)
    } else if exclusions.contains(&method.name) {
        Some(ExclusionReason::Blacklisted)
    } else if !method.has_body() {
        Some(ExclusionReason::NoBody)
    } else {
        None
    }
}

/// Builds the abstract counterpart of `method`.
///
/// A documentation block, when present and non-empty, is copied and its type
/// references are registered on `imports` (the enclosing unit), not on the
/// method.
pub fn transcribe(method: &MethodDescriptor, imports: &mut ImportSet) -> GeneratedMethod {
    let doc_block = method
        .doc_comment
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(DocBlock::parse)
        .filter(|doc| !doc.is_empty());

    if let Some(doc) = &doc_block {
        import_types_in_doc_block(doc, imports);
    }

    GeneratedMethod {
        name: method.name.clone(),
        visibility: method.visibility,
        is_static: method.is_static,
        is_final: method.is_final,
        is_abstract: true,
        returns_reference: method.returns_reference,
        parameters: method.parameters.clone(),
        return_type: method.return_type.clone(),
        doc_block,
    }
}
