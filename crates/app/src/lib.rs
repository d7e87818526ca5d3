//! Screen state and presentation for the restroom finder
//!
//! The crate is UI-toolkit agnostic: [`shell::AppShell`] is an event-driven
//! state machine and [`view`] turns its state into plain view models that a
//! front end (the terminal CLI, or anything else) renders.
//!
//! Collaborators are injected:
//! - [`backend::RestroomBackend`] for ranking and rating calls
//! - [`location::LocationProvider`] for permission and position
//! - [`notify::Notifier`] for user-facing alerts
//! - [`shell::Clock`] for the request time of day

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod error;
pub mod filter;
pub mod location;
pub mod notify;
pub mod shell;
pub mod view;

pub use error::{AppError, ErrorKind};
pub use filter::{FilterSelection, FilterState};
pub use notify::{Notification, Notifier};
pub use shell::{AppShell, Phase, ShellEvent, ViewMode};
