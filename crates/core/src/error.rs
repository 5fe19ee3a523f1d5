//! # Error Module
//!
//! Domain errors for kycaml built on thiserror.
//!
//! Generation itself never fails for valid input; the only failure mode
//! in the core is a caller handing over arguments outside the domain of
//! an operation (empty collections, ratios outside `[0, 1]`, unknown
//! pattern names).

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required argument was empty or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Build an `InvalidArgument` from anything printable.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }
}

/// Reject ratios outside the closed unit interval (NaN included).
pub fn ensure_ratio(name: &str, ratio: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(())
    } else {
        Err(CoreError::invalid_argument(format!(
            "{} must be within [0, 1], got {}",
            name, ratio
        )))
    }
}
