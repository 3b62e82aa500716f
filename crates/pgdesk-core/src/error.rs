//! Error types for pgdesk

use thiserror::Error;

/// Core error type for pgdesk operations
#[derive(Error, Debug)]
pub enum PgdeskError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for pgdesk operations
pub type Result<T> = std::result::Result<T, PgdeskError>;
