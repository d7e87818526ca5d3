//! Backend seam used by the shell

use restroom_api_client::models::{BathroomRecord, Rating, RatingAck, UserContext};
use restroom_api_client::{ApiResult, RestroomClient};

/// Ranking and rating calls the shell depends on
#[allow(async_fn_in_trait)]
pub trait RestroomBackend {
    /// Ranked restrooms for a context, in server order
    async fn fetch_ranked(&self, context: &UserContext) -> ApiResult<Vec<BathroomRecord>>;

    /// Submit a star rating
    async fn submit_rating(&self, bathroom_id: &str, rating: Rating) -> ApiResult<RatingAck>;
}

impl RestroomBackend for RestroomClient {
    async fn fetch_ranked(&self, context: &UserContext) -> ApiResult<Vec<BathroomRecord>> {
        self.ranking().top_bathrooms(context).await
    }

    async fn submit_rating(&self, bathroom_id: &str, rating: Rating) -> ApiResult<RatingAck> {
        self.ratings().submit(bathroom_id, rating).await
    }
}
