//! Authentication routes
//!
//! Registration, login and the current-user profile. Login and
//! registration are the only unauthenticated writes in the API; both
//! return a signed access token. Password hashing and verification run
//! on the blocking thread pool.

use crate::auth::Identity;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use jobkonnect_shared::types::{AuthTokens, LoginRequest, RegisterRequest, UserProfile};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", axum::routing::get(get_profile))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthTokens>)> {
    let tokens = UserService::register(&state.db, state.jwt(), req).await?;
    Ok((StatusCode::CREATED, Json(tokens)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(tokens))
}

/// Get current user profile (requires authentication)
///
/// GET /api/v1/auth/me
async fn get_profile(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::get_profile(&state.db, identity.user_id).await?;
    Ok(Json(profile))
}
