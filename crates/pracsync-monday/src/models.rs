//! Internal API request and response types for Monday.com.
//!
//! These types mirror the GraphQL wire format and are not exposed to
//! consumers; see `parsing.rs` for the conversion into core types.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DEFAULT_API_URL;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Monday.com client.
#[derive(Debug, Clone)]
pub struct MondayConfig {
    /// GraphQL endpoint
    pub api_url: Url,
    /// API token
    pub token: String,
    /// `API-Version` header value
    pub api_version: String,
    /// User agent string
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Maximum number of retry attempts for transient errors (default: 0)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl Default for MondayConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            token: String::new(),
            api_version: "2024-10".to_string(),
            user_agent: "pracsync".to_string(),
            timeout_ms: 30_000,
            max_retries: 0,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// A GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}

impl GraphqlRequest {
    pub const fn new(query: &'static str, variables: serde_json::Value) -> Self {
        Self { query, variables }
    }
}

// ============================================================================
// Response envelope
// ============================================================================

/// Top-level GraphQL response.
///
/// Monday.com reports failures either as a GraphQL `errors` array or, on
/// some API versions, as a flat `error_message`.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Items
// ============================================================================

/// `boards(ids: ...) { items_page { ... } }`
#[derive(Debug, Deserialize)]
pub struct BoardsData {
    #[serde(default)]
    pub boards: Vec<BoardData>,
}

#[derive(Debug, Deserialize)]
pub struct BoardData {
    pub items_page: ItemsPageData,
}

/// `next_items_page(cursor: ...) { ... }`
#[derive(Debug, Deserialize)]
pub struct NextItemsPageData {
    pub next_items_page: ItemsPageData,
}

#[derive(Debug, Deserialize)]
pub struct ItemsPageData {
    pub cursor: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemData>,
}

#[derive(Debug, Deserialize)]
pub struct ItemData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub group: Option<GroupData>,
    #[serde(default)]
    pub column_values: Vec<ColumnValueData>,
}

#[derive(Debug, Deserialize)]
pub struct GroupData {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ColumnValueData {
    pub id: String,
    pub value: Option<String>,
}

// ============================================================================
// Assets
// ============================================================================

/// `assets(ids: [...]) { ... }`
#[derive(Debug, Deserialize)]
pub struct AssetsData {
    #[serde(default)]
    pub assets: Vec<AssetData>,
}

#[derive(Debug, Deserialize)]
pub struct AssetData {
    pub public_url: Option<String>,
    pub url: Option<String>,
}

impl AssetData {
    /// Best fetchable URL: the pre-signed public URL, then the plain one.
    pub fn fetch_url(self) -> Option<String> {
        self.public_url
            .filter(|u| !u.is_empty())
            .or_else(|| self.url.filter(|u| !u.is_empty()))
    }
}
