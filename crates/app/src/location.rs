//! Device location acquisition

use crate::error::AppError;
use restroom_geo::Coordinate;

/// Outcome of a location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Foreground location access granted
    Granted,
    /// Access refused
    Denied,
}

/// Source of the device position.
///
/// Permission prompting belongs to the platform; the shell only asks and
/// reacts to the answer.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// Ask for foreground location access
    async fn request_permission(&mut self) -> Permission;

    /// Current position; fails with [`AppError::LocationUnavailable`]
    async fn current_position(&mut self) -> Result<Coordinate, AppError>;
}

/// A location known up front (command-line flag or config file).
///
/// With no coordinate, permission is reported as denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(Option<Coordinate>);

impl FixedLocation {
    /// Wrap an optional coordinate
    #[must_use]
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self(coordinate)
    }
}

impl LocationProvider for FixedLocation {
    async fn request_permission(&mut self) -> Permission {
        if self.0.is_some() {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    async fn current_position(&mut self) -> Result<Coordinate, AppError> {
        self.0
            .ok_or_else(|| AppError::LocationUnavailable("no position configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_location_granted() {
        let mut provider = FixedLocation::new(Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(provider.request_permission().await, Permission::Granted);
        assert_eq!(provider.current_position().await.unwrap(), Coordinate::new(1.0, 2.0));
    }

    #[tokio::test]
    async fn test_missing_location_is_denied() {
        let mut provider = FixedLocation::default();
        assert_eq!(provider.request_permission().await, Permission::Denied);
        assert!(provider.current_position().await.is_err());
    }
}
