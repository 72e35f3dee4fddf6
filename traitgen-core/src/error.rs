//! Typed error handling for traitgen.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for traitgen operations.
///
/// A failed compilation is always observable as one of these variants;
/// no partially built unit is ever handed back alongside it.
#[derive(Error, Debug)]
pub enum TraitgenError {
    /// The requested source type is unknown to the reflection backend
    #[error("Type not found: {type_name}")]
    TypeNotFound { type_name: String },

    /// I/O error when reading/writing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed method descriptor dump
    #[error("Metadata error: {message}")]
    Metadata { message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl TraitgenError {
    /// Create a lookup failure for the given type identifier.
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        Self::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a metadata error.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (scanning can skip the offending file).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the offending type identifier of a lookup failure.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::TypeNotFound { type_name } => Some(type_name),
            _ => None,
        }
    }
}

/// Convenience type alias for traitgen results.
pub type TraitgenResult<T> = Result<T, TraitgenError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> TraitgenResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> TraitgenResult<T> {
        self.map_err(|e| TraitgenError::io(path, e))
    }
}
