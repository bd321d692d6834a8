//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};

use common::AppResult;
use domain::User;

use crate::extractors::ValidatedJson;
use crate::state::AppState;
use crate::types::{CreateUserRequest, DeleteResponse, UpdateUserRequest, UserListResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", patch(update_user).delete(delete_user))
}

/// List community members
///
/// Falls back to sample data (with a `diagnostic`) when the remote API is unusable.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Members and stats", body = UserListResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    Json(state.directory.list_users().await)
}

/// Add a member
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Member created", body = User),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Remote API rejected the request")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.directory.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Edit a member
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Member updated", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 502, description = "Remote API rejected the request")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let user = state.directory.update_user(&id, payload).await?;
    Ok(Json(user))
}

/// Remove a member
///
/// Always succeeds; a member unknown to both the remote API and the
/// fallback store is simply not there anymore.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Member removed", body = DeleteResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    let deleted = state.directory.delete_user(&id).await;
    Json(DeleteResponse { deleted })
}
