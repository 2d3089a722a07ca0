//! Command handlers.
//!
//! Handlers are thin: validate CLI input, wire the adapters, call the
//! pipeline and format its result for the terminal.

pub mod sync;
