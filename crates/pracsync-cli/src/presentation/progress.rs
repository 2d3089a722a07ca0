//! Live per-item progress.

use std::io::Write;

use pracsync_core::{OutcomeKind, SlotDescriptor, TransferOutcome};
use pracsync_sync::SyncObserver;

/// Streams progress lines as the run proceeds.
pub struct ConsoleObserver<W: Write + Send> {
    out: W,
    fetched: usize,
}

impl ConsoleObserver<std::io::Stdout> {
    /// Observer printing to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleObserver<W> {
    pub const fn new(out: W) -> Self {
        Self { out, fetched: 0 }
    }

    /// Consume the observer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    // Progress output is best effort; a closed stdout must not fail the run.
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

impl<W: Write + Send> SyncObserver for ConsoleObserver<W> {
    fn page_fetched(&mut self, page: usize, items: usize) {
        self.fetched += items;
        let total = self.fetched;
        self.line(format_args!("Page {page}: Fetched {items} items (Total: {total})"));
    }

    fn items_selected(&mut self, series: &str, count: usize) {
        if count > 0 {
            self.line(format_args!("\n✓ Found {count} practices in {series}"));
        }
    }

    fn item_started(&mut self, sequence: usize, item_name: &str) {
        self.line(format_args!("\n[{sequence:03}_{item_name}]"));
    }

    fn slot_finished(&mut self, slot: &SlotDescriptor, outcome: &TransferOutcome) {
        let tag = slot.tag;
        match outcome.kind {
            OutcomeKind::SkippedExists => {
                self.line(format_args!("  ○ {tag}: Already exists, skipping"));
            }
            OutcomeKind::Downloaded => self.line(format_args!("  ↓ {tag}: Downloading... ✓")),
            OutcomeKind::FailedResolve | OutcomeKind::FailedTransfer => {
                let reason = outcome.detail.as_deref().unwrap_or(outcome.kind.label());
                self.line(format_args!("  ✗ {tag}: {reason}"));
            }
        }
    }

    fn item_without_files(&mut self, _sequence: usize, _item_name: &str) {
        self.line(format_args!("  (no files available)"));
    }
}
