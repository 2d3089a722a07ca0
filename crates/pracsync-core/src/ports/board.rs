//! Board source port trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{BoardPage, PageRequest};

/// Errors from board listing operations.
///
/// Any of these aborts a sync run: the listing is all-or-nothing.
#[derive(Debug, Error)]
pub enum BoardPortError {
    /// Authentication was rejected by the board service.
    #[error("Authentication failed: {message}")]
    Unauthorized {
        /// Message reported by the service
        message: String,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network or non-success HTTP status.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The service answered with an error payload.
    #[error("Board query failed: {message}")]
    Query {
        /// Errors reported by the service
        message: String,
    },

    /// The response could not be understood.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration is unusable.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for board port operations.
pub type BoardPortResult<T> = Result<T, BoardPortError>;

/// Port trait for the remote project board.
///
/// # Design
///
/// - `fetch_page` is fail-fast: any transport failure or error payload is
///   returned as an error and the caller aborts the run
/// - `resolve_asset_url` never fails: an unresolvable handle yields `None`
///   so the caller can record a distinguishable outcome and continue
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetch one page of items.
    ///
    /// Paging is over when the returned page is empty or carries no cursor.
    async fn fetch_page(&self, request: &PageRequest) -> BoardPortResult<BoardPage>;

    /// Resolve an asset handle to a directly fetchable URL.
    async fn resolve_asset_url(&self, asset_id: u64) -> Option<String>;
}
