//! Visit recording endpoint

use crate::client::RestroomClient;
use crate::error::ApiResult;
use crate::models::{VisitRequest, VisitResponse};

/// Route of the visit endpoint
pub const RECORD_VISIT: &str = "record-visit";

/// Visit API interface
#[derive(Clone)]
pub struct VisitsApi {
    client: RestroomClient,
}

impl VisitsApi {
    pub(crate) fn new(client: RestroomClient) -> Self {
        Self { client }
    }

    /// Record that the user visited a restroom; feeds the ranker's history.
    pub async fn record(&self, bathroom_id: &str) -> ApiResult<VisitResponse> {
        self.client
            .post(RECORD_VISIT, &VisitRequest { bathroom_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::testing::OneShotServer;

    #[test]
    fn test_visit_request_wire_format() {
        let body = VisitRequest { bathroom_id: "br-3" };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"bathroom_id": "br-3"})
        );
    }

    #[test]
    fn test_visit_response_deserialize() {
        let response: VisitResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_record_posts_bathroom_id() {
        let server = OneShotServer::respond("200 OK", r#"{"status":"ok"}"#);

        let response = server.client().visits().record("b1").await.unwrap();
        assert_eq!(response.status, "ok");

        let request = server.captured();
        assert_eq!(request.request_line, "POST /api/record-visit HTTP/1.1");
        assert_eq!(request.body, serde_json::json!({"bathroom_id": "b1"}));
    }
}
