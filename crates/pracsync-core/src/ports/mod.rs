//! Port definitions for external collaborators.
//!
//! Adapters implement these traits; the sync engine depends only on them.

mod board;

pub use board::{BoardPortError, BoardPortResult, BoardSource};
