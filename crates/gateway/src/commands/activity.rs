//! Activity command - Shows or clears the feed.

use common::AppResult;

use crate::cli::args::ActivityArgs;
use crate::commands::print_json;
use crate::config::GatewayConfig;
use crate::state::AppState;

/// Execute the activity command
pub async fn execute(args: ActivityArgs, config: GatewayConfig) -> AppResult<()> {
    let state = AppState::from_config(config).await?;

    if args.clear {
        state.directory.clear_activity().await;
        tracing::info!("Activity feed cleared");
        return Ok(());
    }

    print_json(&state.directory.activity().await)
}
