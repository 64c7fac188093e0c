//! Error types and handling for the server and CLI.
//!
//! A unified error type that can represent errors from all domains and
//! external dependencies.

use thiserror::Error;

/// A specialized Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Defect in the built-in catalog or profile tables.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::catalog::CatalogError),

    /// A selection request could not be resolved.
    #[error(transparent)]
    Selection(#[from] crate::domains::selection::SelectionError),

    /// Token table or accounting failure.
    #[error("Accounting error: {0}")]
    Accounting(#[from] crate::domains::accounting::AccountingError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Transport startup or runtime failure.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
