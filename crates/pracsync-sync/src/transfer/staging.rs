//! Staged writes: stream into a temporary file next to the target, then
//! rename it into place.
//!
//! The staging file lives in the target directory so the final rename
//! never crosses filesystems. It is removed on drop, so an error or a
//! cancellation at any point leaves nothing at the final path.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;

use super::fetcher::ContentStream;
use crate::error::TransferError;

/// Why a staged write did not complete.
#[derive(Debug)]
pub(crate) enum StageFailure {
    Interrupted,
    Failed(TransferError),
}

impl From<TransferError> for StageFailure {
    fn from(err: TransferError) -> Self {
        Self::Failed(err)
    }
}

impl From<std::io::Error> for StageFailure {
    fn from(err: std::io::Error) -> Self {
        Self::Failed(err.into())
    }
}

/// Drain `stream` into `target` via a staging file.
///
/// Returns the number of bytes written.
pub(crate) async fn write_staged(
    mut stream: ContentStream,
    target: &Path,
    read_timeout: Duration,
    cancel: &CancellationToken,
) -> Result<u64, StageFailure> {
    let dir = target
        .parent()
        .ok_or_else(|| TransferError::other(format!("{} has no parent", target.display())))?;
    tokio::fs::create_dir_all(dir).await?;

    let mut staging = tempfile::Builder::new()
        .prefix(".pracsync-")
        .suffix(".part")
        .tempfile_in(dir)?;
    let mut written: u64 = 0;

    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(StageFailure::Interrupted),
            next = tokio::time::timeout(read_timeout, stream.next()) => next,
        };

        let chunk = match next {
            Err(_) => {
                return Err(TransferError::Timeout {
                    seconds: read_timeout.as_secs(),
                }
                .into());
            }
            Ok(None) => break,
            Ok(Some(chunk)) => chunk?,
        };

        staging.write_all(&chunk)?;
        written += chunk.len() as u64;
    }

    staging.as_file().sync_all()?;
    staging.persist(target).map_err(|e| e.error)?;
    Ok(written)
}
