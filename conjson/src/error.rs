//! Error types for the conjson adapters

use thiserror::Error;

/// conjson error types
#[derive(Debug, Error)]
pub enum ConjsonError {
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O operation failed while reading or writing a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A transform produced bytes that are not UTF-8.
    #[error("Transformed document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// A pipeline or encoder configuration cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConjsonError>;
