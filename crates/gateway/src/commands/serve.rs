//! Serve command - Starts the HTTP server.

use common::AppResult;

use crate::cli::args::ServeArgs;
use crate::config::GatewayConfig;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: GatewayConfig) -> AppResult<()> {
    config.host = args.host;
    config.port = args.port;

    crate::run_server(config).await
}
