//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use restroom_app::notify::{Notification, Notifier};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a user-facing notification
    ///
    /// Confirmations go to stdout, everything else to stderr.
    pub fn notification(notification: &Notification) {
        let text = notification_text(notification);
        if is_confirmation(notification) {
            Self::success(&text);
        } else {
            Self::error(&text);
        }
    }
}

/// Single-line form of a notification, `title: message`
pub fn notification_text(notification: &Notification) -> String {
    if notification.message.is_empty() {
        notification.title.clone()
    } else {
        format!("{}: {}", notification.title, notification.message)
    }
}

fn is_confirmation(notification: &Notification) -> bool {
    *notification == Notification::rating_submitted()
}

/// Notifier that prints through [`Status`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notification: Notification) {
        Status::notification(&notification);
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
