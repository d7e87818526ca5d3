//! User-facing notifications
//!
//! Every failure path in the shell produces exactly one notification.

use serde::Serialize;

/// An alert shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Short title
    pub title: String,
    /// Body text, may be empty
    pub message: String,
}

impl Notification {
    /// Build a notification
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Location access refused
    #[must_use]
    pub fn permission_denied() -> Self {
        Self::new(
            "Permission Denied",
            "We need location access to find nearby restrooms.",
        )
    }

    /// Position fix failed
    #[must_use]
    pub fn location_failed() -> Self {
        Self::new(
            "Error",
            "Something went wrong while getting your location.",
        )
    }

    /// Ranking request failed
    #[must_use]
    pub fn fetch_failed() -> Self {
        Self::new("Error", "Failed to fetch bathrooms. Please try again.")
    }

    /// Submit pressed with no stars picked
    #[must_use]
    pub fn rating_missing() -> Self {
        Self::new("Please select a rating first", "")
    }

    /// Rating acknowledged by the backend
    #[must_use]
    pub fn rating_submitted() -> Self {
        Self::new("Rating Submitted", "Thank you for your feedback!")
    }

    /// Rating request failed
    #[must_use]
    pub fn rating_failed() -> Self {
        Self::new("Error", "Failed to submit rating. Please try again.")
    }
}

/// Sink for notifications; the front end decides how to show them
pub trait Notifier {
    /// Show a notification
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Everything notified so far, oldest first
    pub notifications: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl<F: FnMut(Notification)> Notifier for F {
    fn notify(&mut self, notification: Notification) {
        self(notification);
    }
}
