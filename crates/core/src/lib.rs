//! Core utilities for the restroom finder
//!
//! Shared functionality used by the client, app and CLI crates:
//!
//! - **Error handling**: coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use restroom_core::config::Config;
//!
//! let config = Config::load(None).expect("config");
//! println!("API: {:?}", config.schema.api.base_url);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
