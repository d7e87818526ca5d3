//! Ranking endpoint

use crate::client::RestroomClient;
use crate::error::ApiResult;
use crate::models::{BathroomRecord, UserContext};
use tracing::info;

/// Route of the ranking endpoint
pub const TOP_BATHROOMS: &str = "top-bathrooms";

/// Ranking API interface
#[derive(Clone)]
pub struct RankingApi {
    client: RestroomClient,
}

impl RankingApi {
    pub(crate) fn new(client: RestroomClient) -> Self {
        Self { client }
    }

    /// Fetch restrooms ranked for `context`.
    ///
    /// The order of the returned list is the server's ranking and is kept as is.
    pub async fn top_bathrooms(&self, context: &UserContext) -> ApiResult<Vec<BathroomRecord>> {
        let ranked: Vec<BathroomRecord> = self.client.post(TOP_BATHROOMS, context).await?;
        info!(
            count = ranked.len(),
            urgency = %context.urgency,
            preferences = context.preferences.len(),
            "Fetched ranked restrooms"
        );
        Ok(ranked)
    }
}
