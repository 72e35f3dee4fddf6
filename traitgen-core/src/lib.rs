//! traitgen-core: republish a concrete PHP class as a trait of abstract methods.
//!
//! Given a source type, the compiler keeps every public/protected, non-static
//! method that has a body, turns each into an abstract declaration with the
//! same signature and documentation, and imports the types referenced by the
//! documentation. The result renders to a ready-to-write PHP file.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use traitgen_core::prelude::*;
//!
//! let introspector = PhpSourceIntrospector::from_paths(&["vendor/phpunit/phpunit/src"])?;
//! let compiler = Compiler::new(&introspector, "PHPUnit\\Framework\\Assert", "Generated", &["setUp"])?;
//! std::fs::write("AssertTrait.php", compiler.export_as_abstract_methods())?;
//! ```
//!
//! # Module Organization
//!
//! - [`reflect`]: reflection contract and backends (in-memory, PHP source)
//! - [`naming`]: unit name derivation
//! - [`transcribe`]: exclusion policy and abstract method construction
//! - [`docblock`]: documentation block model
//! - [`imports`]: type-reference resolution for documentation
//! - [`compiler`]: orchestration (`compile` + `render`)
//! - [`emit`]: source emission
//! - [`builder`]: fluent builder API
//! - [`error`]: typed error handling
//!
//! # Cargo Features
//!
//! - `php-source` (default): static-analysis backend reading `*.php` files

pub mod builder;
pub mod compiler;
pub mod config;
pub mod docblock;
pub mod emit;
pub mod error;
pub mod imports;
pub mod logging;
pub mod naming;
pub mod prelude;
pub mod reflect;
pub mod report;
pub mod scan;
pub mod transcribe;
pub mod unit;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{IoResultExt, TraitgenError, TraitgenResult};

// Builder API
pub use builder::Traitgen;

// Compilation
pub use compiler::{compile, render, Compiler};

// Configuration
pub use config::{load_config, load_config_file, OutputConfig, TraitgenConfig, CONFIG_FILE_NAME};

// Documentation model and import resolution
pub use docblock::{DocBlock, Tag, TypeableKind};
pub use imports::{import_types_in_doc_block, is_builtin_type, needs_import, ImportSet, BUILTIN_TYPES};

// Emission
pub use emit::{render_parameter, Emitter, PhpEmitter};

// Logging
pub use logging::{init_structured_logging, log_error, log_warn};

// Naming
pub use naming::{derive_unit_name, UNIT_SUFFIX};

// Reflection
pub use reflect::{
    InMemoryIntrospector, MethodDescriptor, ParameterDescriptor, SourceType, TypeIntrospector,
    TypeKind, Visibility,
};

// Reporting
pub use report::{print_json, print_summary, summary, to_json, UnitReport};

// File scanning
pub use scan::{gather_php_files, gather_php_files_with_excludes};

// Transcription
pub use transcribe::{exclusion_reason, transcribe, ExclusionReason, ExclusionSet, CONSTRUCTOR_NAME};

// Generated model
pub use unit::{GeneratedMethod, GeneratedUnit};

// Feature-gated re-exports
#[cfg(feature = "php-source")]
pub use reflect::PhpSourceIntrospector;
