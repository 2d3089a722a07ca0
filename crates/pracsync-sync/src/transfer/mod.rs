//! Transfer engine: skip-or-download decisioning for one slot.
//!
//! # Steps per (item, slot)
//!
//! 1. Asset handles are resolved to a URL; an unresolvable handle is
//!    recorded as `FailedResolve` without retrying.
//! 2. The deterministic target path is computed. If it exists, the slot is
//!    recorded as `SkippedExists` and nothing is fetched. This makes reruns
//!    cheap and safe.
//! 3. Otherwise the body is streamed into a staging file and renamed into
//!    place. Any failure is recorded as `FailedTransfer` and no bytes are
//!    left at the target path.

mod fetcher;
mod paths;
mod staging;

#[cfg(test)]
pub(crate) use fetcher::testing;
pub use fetcher::{ContentFetcher, ContentStream, ReqwestFetcher};
pub use paths::SeriesDestination;

use std::sync::Arc;
use std::time::Duration;

use pracsync_core::{
    BoardSource, FileDescriptor, FileLocator, SlotDescriptor, TransferOutcome, file_extension,
    target_file_name,
};
use tokio_util::sync::CancellationToken;

use crate::error::Interrupted;
use staging::{StageFailure, write_staged};

/// Identifies the slot being transferred.
#[derive(Debug, Clone, Copy)]
pub struct SlotTarget<'a> {
    /// 1-based position of the item within the series.
    pub sequence: usize,
    /// Display name of the item.
    pub item_name: &'a str,
    /// Slot configuration.
    pub slot: &'a SlotDescriptor,
}

impl SlotTarget<'_> {
    fn file_name(&self, extension: &str) -> String {
        target_file_name(self.sequence, self.item_name, self.slot.category, extension)
    }
}

/// Performs the per-slot transfer steps.
pub struct TransferEngine {
    board: Arc<dyn BoardSource>,
    fetcher: Arc<dyn ContentFetcher>,
    read_timeout: Duration,
}

impl TransferEngine {
    /// Create an engine resolving assets through `board` and fetching
    /// content through `fetcher`.
    pub fn new(
        board: Arc<dyn BoardSource>,
        fetcher: Arc<dyn ContentFetcher>,
        read_timeout: Duration,
    ) -> Self {
        Self {
            board,
            fetcher,
            read_timeout,
        }
    }

    /// Transfer one file into `destination`.
    ///
    /// Every call that is not interrupted yields exactly one outcome.
    pub async fn transfer(
        &self,
        destination: &SeriesDestination,
        target: SlotTarget<'_>,
        descriptor: &FileDescriptor,
        cancel: &CancellationToken,
    ) -> Result<TransferOutcome, Interrupted> {
        let declared = descriptor.declared_name.as_deref();

        let url = match &descriptor.locator {
            FileLocator::Url(url) => url.clone(),
            FileLocator::Asset(asset_id) => {
                let resolved = tokio::select! {
                    biased;
                    () = cancel.cancelled() => return Err(Interrupted),
                    url = self.board.resolve_asset_url(*asset_id) => url,
                };
                match resolved {
                    Some(url) => url,
                    None => {
                        let file_name = target.file_name(&file_extension(declared, None));
                        return Ok(TransferOutcome::unresolved(file_name, *asset_id));
                    }
                }
            }
        };

        let file_name = target.file_name(&file_extension(declared, Some(&url)));
        let path = destination.target_path(&file_name);

        if let Ok(meta) = tokio::fs::metadata(&path).await {
            tracing::debug!(path = %path.display(), "Target exists, skipping");
            return Ok(TransferOutcome::skipped(file_name, meta.len()));
        }

        let stream = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Interrupted),
            stream = self.fetcher.open(&url) => stream,
        };
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Transfer failed to start");
                return Ok(TransferOutcome::transfer_failed(file_name, e.to_string()));
            }
        };

        match write_staged(stream, &path, self.read_timeout, cancel).await {
            Ok(size) => {
                tracing::debug!(path = %path.display(), size, "Transfer complete");
                Ok(TransferOutcome::downloaded(file_name, size))
            }
            Err(StageFailure::Interrupted) => Err(Interrupted),
            Err(StageFailure::Failed(e)) => {
                tracing::warn!(file = %file_name, error = %e, "Transfer failed");
                Ok(TransferOutcome::transfer_failed(file_name, e.to_string()))
            }
        }
    }
}
