//! Rating submission endpoint

use crate::client::RestroomClient;
use crate::error::ApiResult;
use crate::models::{Rating, RatingAck, RatingSubmission};

/// Route of the rating endpoint
pub const RATE_BATHROOM: &str = "rate-bathroom";

/// Rating API interface
#[derive(Clone)]
pub struct RatingsApi {
    client: RestroomClient,
}

impl RatingsApi {
    pub(crate) fn new(client: RestroomClient) -> Self {
        Self { client }
    }

    /// Submit a star rating for a restroom.
    ///
    /// The acknowledgment body is backend-defined; an empty body decodes to `null`.
    pub async fn submit(&self, bathroom_id: &str, rating: Rating) -> ApiResult<RatingAck> {
        let body = RatingSubmission { bathroom_id, rating };
        let text = self.client.post_text(RATE_BATHROOM, &body).await?;
        parse_ack(&text)
    }
}

fn parse_ack(text: &str) -> ApiResult<RatingAck> {
    if text.trim().is_empty() {
        return Ok(RatingAck(serde_json::Value::Null));
    }
    Ok(RatingAck(serde_json::from_str(text)?))
}
