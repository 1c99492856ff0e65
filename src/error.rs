//! Error types for RestrictKV
//!
//! Provides a unified error type for all operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias using RestrictError
pub type Result<T> = std::result::Result<T, RestrictError>;

/// Unified error type for RestrictKV operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestrictError {
    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid pair format '{0}', expected 'key=value'")]
    InvalidPair(String),

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    #[error("Restriction not found: {0}")]
    NotFound(String),

    #[error("Batch restriction partially failed: {applied} accepted, {} failed", .failed.len())]
    PartialRestrict {
        /// Number of master pairs accepted; a later pair in the batch with
        /// the same master key overwrites an earlier one, so this can exceed
        /// the number of entries added
        applied: usize,

        /// Batch index and cause of every master pair that was skipped
        failed: Vec<(usize, RestrictError)>,
    },

    // -------------------------------------------------------------------------
    // Write Rejections
    // -------------------------------------------------------------------------
    #[error("Vetoed: {key}={value} is restricted while {master_key}={master_value} is set")]
    Vetoed {
        key: String,
        value: String,
        master_key: String,
        master_value: String,
    },

    // -------------------------------------------------------------------------
    // Resource Errors
    // -------------------------------------------------------------------------
    #[error("Allocation failure: {0}")]
    AllocationFailure(String),
}

impl RestrictError {
    /// Whether this error is a business-rule rejection rather than a fault
    pub fn is_vetoed(&self) -> bool {
        matches!(self, RestrictError::Vetoed { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RestrictError::NotFound(_))
    }
}

impl From<TryReserveError> for RestrictError {
    fn from(e: TryReserveError) -> Self {
        RestrictError::AllocationFailure(e.to_string())
    }
}
