//! Content fetching abstraction.
//!
//! The transfer engine pulls bytes through [`ContentFetcher`], so tests can
//! stream canned content without a network.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{Stream, StreamExt};

use crate::error::{TransferError, TransferResult};

/// A stream of body chunks.
pub type ContentStream = Pin<Box<dyn Stream<Item = TransferResult<Bytes>> + Send>>;

/// Opens a byte stream for a URL.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Start fetching `url`.
    ///
    /// Returns an error for transport failures and non-success statuses;
    /// errors while reading the body arrive through the stream.
    async fn open(&self, url: &str) -> TransferResult<ContentStream>;
}

/// Production fetcher using reqwest.
///
/// Only connection establishment is bounded here; the engine applies a read
/// timeout between chunks so long downloads are not cut off.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with the given connect timeout.
    pub fn new(connect_timeout: Duration) -> TransferResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(concat!("pracsync/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for ReqwestFetcher {
    async fn open(&self, url: &str) -> TransferResult<ContentStream> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::HttpStatus {
                status: status.as_u16(),
            });
        }

        tracing::debug!(
            %url,
            content_length = ?response.content_length(),
            "Transfer started"
        );
        Ok(Box::pin(response.bytes_stream().map(|chunk| chunk.map_err(TransferError::from))))
    }
}

// ============================================================================
// Fake Fetcher for Testing
// ============================================================================
