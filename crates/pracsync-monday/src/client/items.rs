//! Board item listing.

use pracsync_core::{BoardPage, PageRequest};

use crate::error::{MondayError, MondayResult};
use crate::http::HttpBackend;
use crate::models::{BoardsData, NextItemsPageData};
use crate::parsing::parse_page;
use crate::queries::build_page_request;

use super::MondayClient;

impl<B: HttpBackend> MondayClient<B> {
    /// Fetch one page of board items.
    ///
    /// Without a cursor this queries `boards.items_page`; with one it
    /// continues through `next_items_page`.
    pub(crate) async fn fetch_items_page(&self, request: &PageRequest) -> MondayResult<BoardPage> {
        let body = build_page_request(request);

        let wire_page = if request.cursor.is_none() {
            let data: BoardsData = self.backend.post_graphql(&body).await?;
            data.boards
                .into_iter()
                .next()
                .ok_or_else(|| MondayError::BoardNotFound {
                    board_id: request.board_id.clone(),
                })?
                .items_page
        } else {
            let data: NextItemsPageData = self.backend.post_graphql(&body).await?;
            data.next_items_page
        };

        let page = parse_page(wire_page);
        tracing::debug!(
            board_id = %request.board_id,
            items = page.items.len(),
            has_more = !page.is_last(),
            "Fetched board page"
        );
        Ok(page)
    }
}
