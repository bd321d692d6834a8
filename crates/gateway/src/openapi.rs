//! OpenAPI documentation.

use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use domain::{Activity, ActivityKind, ActivityUser, User};

use crate::handlers::health_handler::HealthResponse;
use crate::state::AppState;
use crate::types::{
    CreateUserRequest, DeleteResponse, DirectoryStats, UpdateUserRequest, UserListResponse,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::activity_handler::list_activity,
        crate::handlers::activity_handler::clear_activity,
    ),
    components(
        schemas(
            User,
            Activity,
            ActivityKind,
            ActivityUser,
            CreateUserRequest,
            UpdateUserRequest,
            UserListResponse,
            DirectoryStats,
            DeleteResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "Community member management"),
        (name = "Activity", description = "Community activity feed"),
    )
)]
pub struct ApiDoc;

/// Serve the generated document as JSON.
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
