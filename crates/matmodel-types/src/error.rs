//! Error types for the material model registry.
//!
//! All crates return `MatModelResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the registry crates.
#[derive(Debug, Error)]
pub enum MatModelError {
    /// The requested model name is not declared in the registry.
    #[error("Unknown model: '{name}'")]
    UnknownModel { name: String },

    /// A string is not a well-formed UUID.
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    /// A name or UUID appears more than once.
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// An exported entry disagrees with the built-in registry.
    #[error("UUID mismatch for '{name}': expected {expected}, found {found}")]
    Mismatch {
        name: String,
        expected: String,
        found: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatModelError {
    /// Shorthand for an [`MatModelError::UnknownModel`] lookup miss.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    /// Returns true if this is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownModel { .. })
    }
}

/// Convenience alias for `Result<T, MatModelError>`.
pub type MatModelResult<T> = Result<T, MatModelError>;
