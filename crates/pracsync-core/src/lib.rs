//! Core domain types and port definitions for pracsync.
//!
//! This crate owns the vocabulary shared by every other crate in the
//! workspace: board items and pages, slot configuration, file descriptors,
//! transfer outcomes and the running tally. Adapters (the Monday.com client,
//! the sync engine, the CLI) depend on this crate, never the other way round.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    BoardItem, BoardPage, DEFAULT_BOARD_ID, DEFAULT_PAGE_SIZE, FileDescriptor, FileLocator,
    OutcomeKind, PRACTICE_SLOTS, PageRequest, Series, SlotDescriptor, Tally, TransferOutcome,
    UnknownSeries,
};
pub use ports::{BoardPortError, BoardPortResult, BoardSource};
pub use utils::{file_extension, sanitize_filename, target_file_name};

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
