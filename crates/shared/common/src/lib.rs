//! Common utilities shared across the directory crates.
//!
//! This crate provides:
//! - Unified error handling for the repository, the feed and HTTP
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
