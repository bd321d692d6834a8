//! Member commands - list, add, edit and remove.

use common::AppResult;

use crate::cli::args::{AddArgs, EditArgs, RemoveArgs};
use crate::commands::print_json;
use crate::config::GatewayConfig;
use crate::state::AppState;
use crate::types::{validate_request, CreateUserRequest, DeleteResponse, UpdateUserRequest};

/// Execute the list command
pub async fn list(config: GatewayConfig) -> AppResult<()> {
    let state = AppState::from_config(config).await?;
    print_json(&state.directory.list_users().await)
}

/// Execute the add command
pub async fn add(args: AddArgs, config: GatewayConfig) -> AppResult<()> {
    let request = CreateUserRequest {
        name: args.name,
        email: args.email,
        bio: args.bio,
        avatar_url: args.avatar_url,
    };
    validate_request(&request)?;

    let state = AppState::from_config(config).await?;
    let user = state.directory.create_user(request).await?;
    tracing::info!(id = %user.id, "Member added");
    print_json(&user)
}

/// Execute the edit command
pub async fn edit(args: EditArgs, config: GatewayConfig) -> AppResult<()> {
    let request = UpdateUserRequest {
        name: args.name,
        email: args.email,
        bio: args.bio,
        avatar_url: args.avatar_url,
    };
    validate_request(&request)?;

    let state = AppState::from_config(config).await?;
    let user = state.directory.update_user(&args.id, request).await?;
    print_json(&user)
}

/// Execute the remove command
pub async fn remove(args: RemoveArgs, config: GatewayConfig) -> AppResult<()> {
    let state = AppState::from_config(config).await?;
    let deleted = state.directory.delete_user(&args.id).await;
    print_json(&DeleteResponse { deleted })
}
