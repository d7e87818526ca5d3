//! Terminal front end pieces for the restroom finder
//!
//! Provides shared CLI functionality:
//! - Status messages and notifications
//! - Loading spinner
//! - Text renderers for the list, map and detail screens

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod render;

pub use output::{Status, TerminalNotifier};
pub use render::Renderer;
