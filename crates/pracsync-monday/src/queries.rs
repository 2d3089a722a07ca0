//! GraphQL documents and variable builders for the Monday.com API.
//!
//! Pure functions only, so every request the client sends can be checked
//! without a network.

use pracsync_core::PageRequest;
use serde_json::json;

use crate::models::GraphqlRequest;

/// First page of a board.
pub const ITEMS_PAGE_QUERY: &str = r"
query ($boardId: [ID!], $limit: Int!) {
  boards(ids: $boardId) {
    items_page(limit: $limit) {
      cursor
      items {
        id
        name
        group { id title }
        column_values { id value text type }
      }
    }
  }
}";

/// Any page after the first, addressed by cursor.
pub const NEXT_ITEMS_PAGE_QUERY: &str = r"
query ($limit: Int!, $cursor: String!) {
  next_items_page(limit: $limit, cursor: $cursor) {
    cursor
    items {
      id
      name
      group { id title }
      column_values { id value text type }
    }
  }
}";

/// Asset lookup by id.
pub const ASSET_QUERY: &str = r"
query ($assetIds: [ID!]!) {
  assets(ids: $assetIds) {
    id
    name
    public_url
    url
  }
}";

/// Build the request for a page of items.
///
/// The first page goes through `boards.items_page`; later pages use the
/// board-independent `next_items_page` with the previous cursor.
pub fn build_page_request(request: &PageRequest) -> GraphqlRequest {
    match request.cursor.as_deref() {
        None => GraphqlRequest::new(
            ITEMS_PAGE_QUERY,
            json!({ "boardId": [request.board_id], "limit": request.limit }),
        ),
        Some(cursor) => GraphqlRequest::new(
            NEXT_ITEMS_PAGE_QUERY,
            json!({ "limit": request.limit, "cursor": cursor }),
        ),
    }
}

/// Build the request resolving one asset id.
pub fn build_asset_request(asset_id: u64) -> GraphqlRequest {
    GraphqlRequest::new(ASSET_QUERY, json!({ "assetIds": [asset_id.to_string()] }))
}
