//! Monday.com board client for pracsync.
//!
//! Implements the core [`BoardSource`](pracsync_core::BoardSource) port on
//! top of the Monday.com GraphQL API: cursor-paginated item listing and
//! one-shot asset URL resolution.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultMondayClient is meant to be used through the BoardSource trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod queries;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultMondayClient;

// Configuration
pub use config::{DEFAULT_API_URL, MondayClientConfig};

// Errors surfaced by construction
pub use error::MondayError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
