//! Accounting errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountingError {
    /// The frozen token table could not be read or written.
    #[error("failed to access token snapshot {}: {source}", .path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The frozen token table is not valid JSON of the expected shape.
    #[error("malformed token snapshot: {0}")]
    SnapshotFormat(#[from] serde_json::Error),

    /// The frozen token table disagrees with the live pipeline.
    #[error(
        "token snapshot is stale: {} mismatched, {} missing; regenerate with `rc-mcp-gen snapshot`",
        .mismatches.len(),
        .missing.len()
    )]
    SnapshotStale {
        mismatches: Vec<SnapshotMismatch>,
        missing: Vec<String>,
    },
}

/// One id whose frozen count differs from the live count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SnapshotMismatch {
    pub id: String,
    pub frozen: usize,
    pub live: usize,
}
