//! Error types
//!
//! Only recoverable failures live here: reading files, decoding serialized trees, loading
//! configuration and picking an output format. Broken invariants inside the core (an empty
//! value list reaching the aggregator, a zero fraction denominator) are panics, not errors.

use thiserror::Error;

/// Errors that can occur while serializing a recipe to an output format
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Errors surfaced by the loading and reporting layers
#[derive(Error, Debug)]
pub enum CookError {
    /// Failed to read a recipe file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON recipe tree
    #[error("Invalid JSON recipe: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML recipe tree
    #[error("Invalid YAML recipe: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// File extension that maps to no known serialization
    #[error("Unsupported recipe file extension: '{0}' (expected json, yaml or yml)")]
    UnsupportedExtension(String),
}
