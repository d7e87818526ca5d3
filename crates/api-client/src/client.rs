//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{RankingApi, RatingsApi, VisitsApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Restroom backend client
///
/// Each call is a single request/response exchange: no retry, no caching.
/// Transport failures and non-success statuses are returned to the caller.
#[derive(Clone)]
pub struct RestroomClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl RestroomClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("restroom-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the ranking endpoint
    #[must_use]
    pub fn ranking(&self) -> RankingApi {
        RankingApi::new(self.clone())
    }

    /// Access the rating submission endpoint
    #[must_use]
    pub fn ratings(&self) -> RatingsApi {
        RatingsApi::new(self.clone())
    }

    /// Access the visit recording endpoint
    #[must_use]
    pub fn visits(&self) -> VisitsApi {
        VisitsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// POST a JSON body and decode a JSON response
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.send_post(path, body).await?;
        response.json().await.map_err(ApiError::Request)
    }

    /// POST a JSON body and return the raw response text
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post_text<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<String> {
        let response = self.send_post(path, body).await?;
        response.text().await.map_err(ApiError::Request)
    }

    async fn send_post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Response> {
        let url = self.config.endpoint(path);
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let result = self
            .inner
            .post(&url)
            .header(X_REQUEST_ID, &request_id)
            .json(body)
            .send()
            .await;
        let elapsed = start.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    url = %url,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "Request failed"
                );
                return Err(ApiError::Request(e));
            }
        };

        debug!(
            request_id = %request_id,
            url = %url,
            status = response.status().as_u16(),
            elapsed_ms = elapsed.as_millis(),
            "Response received"
        );

        check_status(response).await
    }
}

/// Pass through success responses, turn everything else into `ApiResponse`
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::api_response(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = tokio_test::assert_ok!(RestroomClient::with_config(ClientConfig::development()));
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("localhost:5000");
        assert!(matches!(
            RestroomClient::with_config(config),
            Err(ApiError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on loopback is closed in test environments
        let config = ClientConfig::development()
            .with_base_url("http://127.0.0.1:9/api")
            .with_timeout(Duration::from_secs(2));
        let client = RestroomClient::with_config(config).unwrap();

        let err = tokio_test::assert_err!(
            client
                .post_text("top-bathrooms", &serde_json::json!({}))
                .await
        );
        assert!(err.is_network());
    }
}
