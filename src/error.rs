//! Error types for Toolshelf
//!
//! Centralized error handling using thiserror. The pure catalog and blog
//! functions never produce these; only data-source access does.

use thiserror::Error;

/// All error types that can occur in Toolshelf
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record not found in a collection
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record rejected on create (empty name, duplicate id, ...)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Data-source query that cannot match anything meaningful
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Newsletter address failed the shape check
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML import error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Toolshelf operations
pub type Result<T> = std::result::Result<T, CatalogError>;
