//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use traitgen_core::prelude::*;
//! ```

pub use crate::builder::Traitgen;
pub use crate::compiler::{compile, render, Compiler};
pub use crate::emit::{Emitter, PhpEmitter};
pub use crate::error::{TraitgenError, TraitgenResult};
pub use crate::reflect::{InMemoryIntrospector, SourceType, TypeIntrospector};
pub use crate::transcribe::ExclusionSet;
pub use crate::unit::{GeneratedMethod, GeneratedUnit};

#[cfg(feature = "php-source")]
pub use crate::reflect::PhpSourceIntrospector;
