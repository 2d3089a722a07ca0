//! Error types for the sync pipeline.
//!
//! Only [`SyncError`] aborts a run. Transfer failures are folded into
//! per-slot outcomes and report failures are carried on the run result.

use std::path::PathBuf;

use pracsync_core::BoardPortError;
use thiserror::Error;

/// Errors that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Listing the board failed; nothing was downloaded.
    #[error("Failed to list board items: {0}")]
    Board(#[from] BoardPortError),

    /// The series output directory could not be created.
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The run was interrupted before any item was processed.
    #[error("Interrupted while fetching board items")]
    Interrupted,
}

/// Result type alias for single-transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

/// Reasons a single byte transfer can fail.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No data arrived within the read timeout.
    #[error("Timed out after {seconds}s without data")]
    Timeout {
        /// Read timeout in seconds
        seconds: u64,
    },

    /// Local filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else reported by a content fetcher.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl TransferError {
    /// Create a generic transfer error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Errors writing the run report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization or write error.
    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Marker returned when a transfer is abandoned because the run was
/// cancelled. The staging file has already been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transfer interrupted")]
pub struct Interrupted;
