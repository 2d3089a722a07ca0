//! Command-line frontend for pracsync.
//!
//! `main.rs` is the composition root: it parses arguments, installs the
//! tracing subscriber and the Ctrl-C handler, and hands over to
//! [`handlers::sync::execute`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// Used by main.rs
use dotenvy as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use error::CliError;
pub use parser::{Cli, SeriesArg};
