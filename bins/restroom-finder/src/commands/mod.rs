//! Subcommand implementations

pub mod detail;
pub mod directions;
pub mod nearby;
pub mod rate;
pub mod visit;
