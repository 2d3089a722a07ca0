//! Configuration for a sync run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pracsync_core::{DEFAULT_BOARD_ID, DEFAULT_PAGE_SIZE, PRACTICE_SLOTS, SlotDescriptor};

/// Default directory downloads are written under.
pub const DEFAULT_OUTPUT_ROOT: &str = "practice_files";

/// Configuration for the sync pipeline.
///
/// # Example
///
/// ```
/// use pracsync_sync::SyncConfig;
///
/// let config = SyncConfig::new()
///     .with_output_root("/tmp/practices")
///     .with_page_size(50)
///     .without_report();
/// ```
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub(crate) output_root: PathBuf,
    pub(crate) board_id: String,
    pub(crate) page_size: u32,
    pub(crate) slots: Vec<SlotDescriptor>,
    pub(crate) write_report: bool,
    pub(crate) read_timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            board_id: DEFAULT_BOARD_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            slots: PRACTICE_SLOTS.to_vec(),
            write_report: true,
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl SyncConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory series folders are created in.
    #[must_use]
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Set the board to list.
    #[must_use]
    pub fn with_board_id(mut self, board_id: impl Into<String>) -> Self {
        self.board_id = board_id.into();
        self
    }

    /// Set the number of items requested per page (at least 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Replace the slot configuration. Slots are processed in this order.
    #[must_use]
    pub fn with_slots(mut self, slots: Vec<SlotDescriptor>) -> Self {
        self.slots = slots;
        self
    }

    /// Skip writing the CSV report.
    #[must_use]
    pub fn without_report(mut self) -> Self {
        self.write_report = false;
        self
    }

    /// Set how long a transfer may go without receiving data.
    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Directory downloads are written under.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Board being synchronized.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }
}
