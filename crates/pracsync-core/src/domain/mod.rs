//! Domain model for practice file synchronization.

mod board;
mod file;
mod outcome;
mod series;
mod slots;

pub use board::{BoardItem, BoardPage, DEFAULT_BOARD_ID, DEFAULT_PAGE_SIZE, PageRequest};
pub use file::{FileDescriptor, FileLocator};
pub use outcome::{OutcomeKind, Tally, TransferOutcome};
pub use series::{Series, UnknownSeries};
pub use slots::{PRACTICE_SLOTS, SlotDescriptor};
