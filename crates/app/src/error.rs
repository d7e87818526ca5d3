//! Application error taxonomy

use restroom_api_client::models::InvalidRating;
use restroom_api_client::ApiError;
use restroom_core::{Error as CoreError, ErrorCode};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to the user by the shell
#[derive(Debug, Error)]
pub enum AppError {
    /// Location access was refused; terminal until granted outside the app
    #[error("location permission denied")]
    PermissionDenied,

    /// The platform could not produce a position fix
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// Transport failure or non-success status from the backend
    #[error("network error: {0}")]
    Network(#[from] ApiError),

    /// No star value picked, or one outside 1..=5
    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),
}

/// Copyable discriminant of [`AppError`], kept in the shell's phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`AppError::PermissionDenied`]
    PermissionDenied,
    /// See [`AppError::LocationUnavailable`]
    LocationUnavailable,
    /// See [`AppError::Network`]
    Network,
    /// See [`AppError::InvalidRating`]
    InvalidRating,
}

impl AppError {
    /// Discriminant of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PermissionDenied => ErrorKind::PermissionDenied,
            Self::LocationUnavailable(_) => ErrorKind::LocationUnavailable,
            Self::Network(_) => ErrorKind::Network,
            Self::InvalidRating(_) => ErrorKind::InvalidRating,
        }
    }
}

impl From<AppError> for CoreError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::PermissionDenied => CoreError::location_permission_denied(),
            AppError::LocationUnavailable(msg) => CoreError::location_unavailable(msg),
            AppError::Network(api) => CoreError::from(api),
            AppError::InvalidRating(e) => {
                CoreError::new(ErrorCode::InvalidInput, e.to_string())
                    .with_suggestion("Pick between 1 and 5 stars")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(AppError::PermissionDenied.kind(), ErrorKind::PermissionDenied);
        assert_eq!(
            AppError::from(ApiError::api_response(502, "")).kind(),
            ErrorKind::Network
        );
        assert_eq!(AppError::from(InvalidRating(0)).kind(), ErrorKind::InvalidRating);
    }

    #[test]
    fn test_core_codes() {
        let core: CoreError = AppError::PermissionDenied.into();
        assert_eq!(core.code, ErrorCode::LocationPermissionDenied);

        let core: CoreError = AppError::LocationUnavailable("no fix".into()).into();
        assert_eq!(core.code, ErrorCode::LocationUnavailable);

        let core: CoreError = AppError::from(InvalidRating(9)).into();
        assert_eq!(core.code, ErrorCode::InvalidInput);
    }
}
