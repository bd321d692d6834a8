//! Activity feed handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use domain::Activity;

use crate::state::AppState;

/// Create activity routes
pub fn activity_routes() -> Router<AppState> {
    Router::new().route("/", get(list_activity).delete(clear_activity))
}

/// Recent community activity, newest first
#[utoipa::path(
    get,
    path = "/activity",
    tag = "Activity",
    responses(
        (status = 200, description = "Recent activity", body = Vec<Activity>)
    )
)]
pub async fn list_activity(State(state): State<AppState>) -> Json<Vec<Activity>> {
    Json(state.directory.activity().await)
}

/// Clear the activity feed
#[utoipa::path(
    delete,
    path = "/activity",
    tag = "Activity",
    responses(
        (status = 204, description = "Feed cleared")
    )
)]
pub async fn clear_activity(State(state): State<AppState>) -> StatusCode {
    state.directory.clear_activity().await;
    StatusCode::NO_CONTENT
}
