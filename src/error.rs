//! Error types for the report crate
//!
//! Report generation itself has no error path: dangling references, missing
//! descriptions, and unset flags are all tolerated by design. Errors only
//! arise at the loading surface, when a document cannot be read or parsed.

use thiserror::Error;

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Loading errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
