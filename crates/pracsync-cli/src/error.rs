//! CLI-specific error types and exit codes.

use pracsync_core::BoardPortError;
use pracsync_monday::MondayError;
use pracsync_sync::SyncError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Unusable configuration or rejected credentials.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local filesystem error.
    #[error("IO error: {0}")]
    Io(String),

    /// The board service failed or answered with errors.
    #[error("{0}")]
    Remote(String),

    /// The user interrupted the run.
    #[error("Download interrupted by user")]
    Interrupted,
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 2: invalid arguments
    /// - 69: remote service unavailable (`EX_UNAVAILABLE`)
    /// - 74: I/O error (`EX_IOERR`)
    /// - 78: configuration error (`EX_CONFIG`)
    /// - 130: interrupted (128 + SIGINT)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Remote(_) => 69,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
            Self::Interrupted => 130,
        }
    }
}

impl From<SyncError> for CliError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Board(
                board @ (BoardPortError::Unauthorized { .. } | BoardPortError::Configuration { .. }),
            ) => Self::Config(board.to_string()),
            SyncError::Board(board) => Self::Remote(format!("Failed to list board items: {board}")),
            SyncError::OutputDir { .. } => Self::Io(err.to_string()),
            SyncError::Interrupted => Self::Interrupted,
        }
    }
}

impl From<MondayError> for CliError {
    fn from(err: MondayError) -> Self {
        Self::Config(format!("Cannot create board client: {err}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
