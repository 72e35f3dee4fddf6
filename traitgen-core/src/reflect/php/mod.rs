//! Static-analysis reflection backend over PHP source files.
//!
//! Files are discovered with [`crate::scan`], lexed and read in parallel, and
//! every class/trait/interface declaration is indexed by its case-insensitive
//! fully-qualified name. Resolving a type assembles the method list the way
//! runtime reflection reports it:
//!
//! 1. the type's own methods, in declaration order
//! 2. methods imported from used traits
//! 3. inherited parent methods that were not overridden
//!
//! Unreadable files and unresolvable parents are logged and skipped.

pub mod lexer;
pub mod reader;

use anyhow::Result;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use reader::{read_declarations, TypeDecl};

use crate::error::{TraitgenError, TraitgenResult};
use crate::reflect::{type_key, MethodDescriptor, SourceType, TypeIntrospector};
use crate::scan::gather_php_files_with_excludes;

/// Result of reading a single file - used for granular parallel control.
#[derive(Debug)]
pub enum FileOutcome {
    /// Successfully read declarations
    Ok(PathBuf, Vec<TypeDecl>),
    /// Read failed (logged, skipped)
    Skipped(PathBuf, TraitgenError),
}

/// Reads a single file. This is the atomic unit of work for parallel indexing.
pub fn read_file(path: &Path) -> FileOutcome {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => return FileOutcome::Skipped(path.to_path_buf(), TraitgenError::io(path, e)),
    };

    // Legacy sources are not always UTF-8; declarations are ASCII either way
    let content = String::from_utf8_lossy(&bytes);
    let (types, skipped) = read_declarations(&content);
    if skipped > 0 {
        debug!(file = %path.display(), skipped, "unclassified characters skipped");
    }
    FileOutcome::Ok(path.to_path_buf(), types)
}

/// Introspector backed by PHP source text.
#[derive(Debug, Clone, Default)]
pub struct PhpSourceIntrospector {
    types: HashMap<String, TypeDecl>,
}

impl PhpSourceIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the declarations of a single in-memory source text.
    pub fn from_source(source: &str) -> Self {
        let mut introspector = Self::new();
        introspector.add_source(source);
        introspector
    }

    /// Indexes declarations from `source`; earlier declarations win.
    pub fn add_source(&mut self, source: &str) {
        let (types, _) = read_declarations(source);
        self.index(types, None);
    }

    /// Scans files and directories for `*.php` and indexes every declaration.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        Self::from_paths_with_excludes(paths, &[])
    }

    /// Like [`from_paths`](Self::from_paths) with extra excluded directory names.
    pub fn from_paths_with_excludes<P: AsRef<Path>>(paths: &[P], excludes: &[&str]) -> Result<Self> {
        let mut files = Vec::new();
        for path in paths {
            files.extend(gather_php_files_with_excludes(path.as_ref(), excludes)?);
        }

        // Indexed (collect preserves order) so duplicate resolution is deterministic
        let outcomes: Vec<FileOutcome> = files.par_iter().map(|p| read_file(p)).collect();

        let mut introspector = Self::new();
        for outcome in outcomes {
            match outcome {
                FileOutcome::Ok(path, types) => introspector.index(types, Some(&path)),
                FileOutcome::Skipped(path, err) => {
                    warn!(file = %path.display(), error = %err, "skipping unreadable source file");
                }
            }
        }

        info!(
            files = files.len(),
            types = introspector.types.len(),
            "indexed PHP declarations"
        );
        Ok(introspector)
    }

    fn index(&mut self, types: Vec<TypeDecl>, origin: Option<&Path>) {
        for decl in types {
            let key = type_key(&decl.name);
            if self.types.contains_key(&key) {
                warn!(
                    type_name = %decl.name,
                    file = %origin.map(|p| p.display().to_string()).unwrap_or_default(),
                    "duplicate declaration ignored"
                );
                continue;
            }
            self.types.insert(key, decl);
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Declared names of every indexed type, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.values().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn collect_methods(
        &self,
        decl: &TypeDecl,
        visited: &mut HashSet<String>,
        seen: &mut HashSet<String>,
        out: &mut Vec<MethodDescriptor>,
    ) {
        if !visited.insert(type_key(&decl.name)) {
            debug!(type_name = %decl.name, "type already visited");
            return;
        }

        // PHP method names are case-insensitive; the first declaration shadows the rest
        for method in &decl.methods {
            if seen.insert(method.name.to_ascii_lowercase()) {
                out.push(method.clone());
            }
        }

        for related in decl.traits.iter().chain(decl.parent.iter()) {
            match self.types.get(&type_key(related)) {
                Some(next) => self.collect_methods(next, visited, seen, out),
                None => warn!(
                    type_name = %decl.name,
                    missing = %related,
                    "related type not indexed; its methods are not inherited"
                ),
            }
        }
    }
}

impl TypeIntrospector for PhpSourceIntrospector {
    fn resolve(&self, type_name: &str) -> TraitgenResult<SourceType> {
        let decl = self
            .types
            .get(&type_key(type_name))
            .ok_or_else(|| TraitgenError::type_not_found(type_name))?;

        let mut methods = Vec::new();
        self.collect_methods(decl, &mut HashSet::new(), &mut HashSet::new(), &mut methods);

        Ok(SourceType {
            name: decl.name.clone(),
            kind: decl.kind,
            methods,
        })
    }
}
