//! Port trait implementation for `MondayClient`.
//!
//! This module implements the core-owned `BoardSource` trait, mapping
//! internal Monday.com errors to port errors at the boundary.

use async_trait::async_trait;
use pracsync_core::{BoardPage, BoardPortError, BoardPortResult, BoardSource, PageRequest};

use crate::client::MondayClient;
use crate::error::MondayError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `MondayError` to core `BoardPortError`.
fn map_error(err: MondayError) -> BoardPortError {
    match err {
        MondayError::ApiRequestFailed { status, body } => match status {
            401 | 403 => BoardPortError::Unauthorized { message: body },
            429 => BoardPortError::RateLimited,
            _ => BoardPortError::Network {
                message: format!("API request failed with status {status}: {body}"),
            },
        },
        MondayError::Graphql { messages } => BoardPortError::Query {
            message: messages.join("; "),
        },
        MondayError::BoardNotFound { board_id } => BoardPortError::InvalidResponse {
            message: format!("board '{board_id}' not found or not accessible"),
        },
        MondayError::InvalidResponse { message } => BoardPortError::InvalidResponse { message },
        MondayError::Network(e) => BoardPortError::Network {
            message: e.to_string(),
        },
        MondayError::InvalidUrl(e) => BoardPortError::Configuration {
            message: e.to_string(),
        },
        MondayError::JsonParse(e) => BoardPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> BoardSource for MondayClient<B> {
    async fn fetch_page(&self, request: &PageRequest) -> BoardPortResult<BoardPage> {
        self.fetch_items_page(request).await.map_err(map_error)
    }

    async fn resolve_asset_url(&self, asset_id: u64) -> Option<String> {
        match self.fetch_asset_url(asset_id).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                tracing::warn!(asset_id, "Asset has no fetchable URL");
                None
            }
            Err(e) => {
                tracing::warn!(asset_id, error = %e, "Asset resolution failed");
                None
            }
        }
    }
}
