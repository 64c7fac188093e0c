//! Resource-specific error types.

use thiserror::Error;

use crate::domains::accounting::AccountingError;
use crate::domains::selection::SelectionError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Accounting(#[from] AccountingError),

    #[error("Failed to serialize resource: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
