//! Sync pipeline for pracsync.
//!
//! Drives one synchronization run of a practice series:
//!
//! - `filter` - select the items of one board group
//! - `extract` - turn a raw slot value into a file descriptor
//! - `transfer` - skip-or-download decisioning and streamed, staged writes
//! - `report` - per-attempt records, tally and the CSV report
//! - `pipeline` - the orchestrator tying these together
//!
//! Everything is strictly sequential: one page, one item, one slot and one
//! transfer at a time.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
pub mod extract;
pub mod filter;
mod observer;
mod pipeline;
pub mod report;
pub mod transfer;

pub use config::{DEFAULT_OUTPUT_ROOT, SyncConfig};
pub use error::{Interrupted, ReportError, SyncError, TransferError, TransferResult};
pub use extract::extract_file;
pub use filter::filter_by_group;
pub use observer::{NoopObserver, SyncObserver};
pub use pipeline::{SyncPipeline, SyncRun};
pub use report::{REPORT_COLUMNS, ReportBuilder, ReportRecord, write_records};
pub use transfer::{
    ContentFetcher, ContentStream, ReqwestFetcher, SeriesDestination, SlotTarget, TransferEngine,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
