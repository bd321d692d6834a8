//! CLI module - Command-line interface for the directory.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `list`, `add`, `edit`, `remove` - Member management
//! - `activity` - Show or clear the activity feed

pub mod args;

pub use args::{Cli, Commands};
