//! Asset URL resolution.

use crate::error::MondayResult;
use crate::http::HttpBackend;
use crate::models::AssetsData;
use crate::queries::build_asset_request;

use super::MondayClient;

impl<B: HttpBackend> MondayClient<B> {
    /// Look up the fetchable URL of an uploaded asset.
    ///
    /// Returns `Ok(None)` when the API knows no such asset or has no URL
    /// for it.
    pub(crate) async fn fetch_asset_url(&self, asset_id: u64) -> MondayResult<Option<String>> {
        let data: AssetsData = self
            .backend
            .post_graphql(&build_asset_request(asset_id))
            .await?;
        Ok(data.assets.into_iter().next().and_then(|a| a.fetch_url()))
    }
}
