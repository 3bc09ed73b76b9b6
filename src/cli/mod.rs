//! CLI commands
//!
//! Command implementations for the `taki` binary.

mod branch;
mod cascade;
mod progress;
mod status;
pub mod style;

pub use branch::run_branch;
pub use cascade::{CascadeOptions, run_cascade};
pub use progress::CliProgress;
pub use status::run_status;
