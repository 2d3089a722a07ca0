//! Transfer outcomes and the running tally.

use std::fmt;

use chrono::{DateTime, Utc};

/// What happened to one attempted file transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Bytes were fetched and written to the target path.
    Downloaded,
    /// The target path already existed; nothing was fetched.
    SkippedExists,
    /// The asset handle could not be resolved to a URL.
    FailedResolve,
    /// The byte transfer failed (network, status or I/O).
    FailedTransfer,
}

impl OutcomeKind {
    /// Whether this outcome counts as a failure.
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::FailedResolve | Self::FailedTransfer)
    }

    /// Human-readable status used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Downloaded => "Downloaded",
            Self::SkippedExists => "Skipped (exists)",
            Self::FailedResolve => "Failed (unresolved asset)",
            Self::FailedTransfer => "Failed (transfer)",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The recorded result of one (item, slot) transfer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Outcome category.
    pub kind: OutcomeKind,
    /// Target file name inside the series directory.
    pub file_name: String,
    /// Size in bytes, when known.
    pub size_bytes: Option<u64>,
    /// When the outcome was decided.
    pub timestamp: DateTime<Utc>,
    /// Failure reason, for failed outcomes.
    pub detail: Option<String>,
}

impl TransferOutcome {
    fn at_now(kind: OutcomeKind, file_name: impl Into<String>) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            size_bytes: None,
            timestamp: Utc::now(),
            detail: None,
        }
    }

    /// A completed download of `size` bytes.
    pub fn downloaded(file_name: impl Into<String>, size: u64) -> Self {
        Self {
            size_bytes: Some(size),
            ..Self::at_now(OutcomeKind::Downloaded, file_name)
        }
    }

    /// A skip because the target already exists with `size` bytes.
    pub fn skipped(file_name: impl Into<String>, size: u64) -> Self {
        Self {
            size_bytes: Some(size),
            ..Self::at_now(OutcomeKind::SkippedExists, file_name)
        }
    }

    /// An asset handle that could not be resolved.
    pub fn unresolved(file_name: impl Into<String>, asset_id: u64) -> Self {
        Self {
            detail: Some(format!("asset {asset_id} could not be resolved")),
            ..Self::at_now(OutcomeKind::FailedResolve, file_name)
        }
    }

    /// A failed byte transfer.
    pub fn transfer_failed(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            detail: Some(reason.into()),
            ..Self::at_now(OutcomeKind::FailedTransfer, file_name)
        }
    }
}

/// Running counters for one sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Every slot that produced a file descriptor.
    pub total_files: u32,
    pub downloaded: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl Tally {
    /// Account for one outcome.
    pub const fn record(&mut self, kind: OutcomeKind) {
        self.total_files += 1;
        match kind {
            OutcomeKind::Downloaded => self.downloaded += 1,
            OutcomeKind::SkippedExists => self.skipped += 1,
            OutcomeKind::FailedResolve | OutcomeKind::FailedTransfer => self.failed += 1,
        }
    }

    /// Whether any transfer failed.
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
