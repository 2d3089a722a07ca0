//! Terminal output for sync runs.
//!
//! Format-only: the pipeline reports events and results, this module turns
//! them into text.

pub mod progress;
pub mod summary;

pub use progress::ConsoleObserver;
pub use summary::{SEPARATOR_WIDTH, format_summary, print_separator};
