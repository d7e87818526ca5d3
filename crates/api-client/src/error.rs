//! Error types for the API client

use restroom_core::{Error as CoreError, ErrorCode};
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned a non-success status
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Transport failure or non-success status
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Request(_) | Self::ApiResponse { .. })
    }
}

impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(msg) => CoreError::config(msg),
            ApiError::ApiResponse { status, message } => CoreError::new(
                ErrorCode::HttpStatus,
                format!("Backend responded with {status}"),
            )
            .with_context(message),
            ApiError::Request(e) if e.is_timeout() => {
                CoreError::new(ErrorCode::Timeout, "Request timed out").with_source(e)
            }
            ApiError::Request(e) => CoreError::network(e.to_string()).with_source(e),
            ApiError::Json(e) => CoreError::from(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let not_found = ApiError::api_response(404, "no such route");
        assert!(not_found.is_network());
        assert!(ApiError::api_response(503, "").is_network());
    }

    #[test]
    fn test_config_is_not_network() {
        assert!(!ApiError::config("bad url").is_network());
    }

    #[test]
    fn test_core_conversion_keeps_status() {
        let core: CoreError = ApiError::api_response(500, "boom").into();
        assert_eq!(core.code, ErrorCode::HttpStatus);
        assert!(core.message.contains("500"));
        assert_eq!(core.context.as_deref(), Some("boom"));
    }
}
