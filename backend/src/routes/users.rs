//! User listing routes

use crate::auth::Identity;
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use jobkonnect_shared::types::UserProfile;
use uuid::Uuid;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

/// GET /api/v1/users - List all users (requires authentication)
async fn list_users(
    State(state): State<AppState>,
    _identity: Identity,
) -> ApiResult<Json<Vec<UserProfile>>> {
    let users = UserService::list_users(&state.db).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/:id - Get a single user profile (requires authentication)
async fn get_user(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    let id =
        Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("Invalid user id".to_string()))?;
    let profile = UserService::get_profile(&state.db, id).await?;
    Ok(Json(profile))
}
