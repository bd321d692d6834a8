//! Commands module - CLI command implementations.

pub mod activity;
pub mod serve;
pub mod users;

use serde::Serialize;

use common::AppResult;

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
