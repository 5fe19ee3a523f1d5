//! # Report Errors
//!
//! Failures while writing or reading generated datasets.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias with ReportError
pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
