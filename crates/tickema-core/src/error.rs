//! Error types for tickema-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid price: {field}={value}")]
    InvalidPrice { field: &'static str, value: f64 },

    #[error("Timestamp must be after the Unix epoch")]
    ZeroTimestamp,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
