//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid data: {0}")]
    InvalidData(#[from] tickema_core::CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FeedError {
    /// Whether this failure must stop the run.
    ///
    /// A well-typed ticker with an unreadable timestamp means the feed format
    /// changed under us; every other decode failure is skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidTimestamp(_))
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
