//! Progress notifications from a sync run.
//!
//! The pipeline never prints. Frontends implement [`SyncObserver`] to render
//! progress however they like; every method has a no-op default.

use pracsync_core::{SlotDescriptor, TransferOutcome};

/// Receives progress events in the order they happen.
pub trait SyncObserver: Send {
    /// A page of board items was received.
    fn page_fetched(&mut self, _page: usize, _items: usize) {}

    /// Filtering finished; `count` items belong to the series.
    fn items_selected(&mut self, _series: &str, _count: usize) {}

    /// Processing of an item begins.
    fn item_started(&mut self, _sequence: usize, _item_name: &str) {}

    /// One slot of the current item produced an outcome.
    fn slot_finished(&mut self, _slot: &SlotDescriptor, _outcome: &TransferOutcome) {}

    /// The current item had no populated slots.
    fn item_without_files(&mut self, _sequence: usize, _item_name: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SyncObserver for NoopObserver {}
