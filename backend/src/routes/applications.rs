//! Job application API routes
//!
//! Every endpoint here is guarded: the token is validated and the
//! caller's identity extracted before any handler runs.

use crate::auth::Identity;
use crate::error::{ApiError, ApiResult};
use crate::services::ApplicationService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use jobkonnect_shared::types::{
    ApplicationRequest, ApplicationResponse, UpdateApplicationStatusRequest,
};
use uuid::Uuid;

/// Create application routes
pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_applications).post(create_application))
        .route("/:id", get(get_application).delete(delete_application))
        .route("/:id/status", patch(update_application_status))
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest("Invalid application id".to_string()))
}

/// POST /api/v1/applications - Apply to a job (job seeker only)
async fn create_application(
    State(state): State<AppState>,
    identity: Identity,
    Json(req): Json<ApplicationRequest>,
) -> ApiResult<(StatusCode, Json<ApplicationResponse>)> {
    let application = ApplicationService::create(state.db(), &identity, req).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications - List applications visible to the caller
async fn list_applications(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let applications = ApplicationService::list(state.db(), &identity).await?;
    Ok(Json(applications))
}

/// GET /api/v1/applications/:id - Get a single application
async fn get_application(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<ApplicationResponse>> {
    let application = ApplicationService::get(state.db(), &identity, parse_id(&id)?).await?;
    Ok(Json(application))
}

/// PATCH /api/v1/applications/:id/status - Update status (employer only)
async fn update_application_status(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    Json(req): Json<UpdateApplicationStatusRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    let application =
        ApplicationService::update_status(state.db(), &identity, parse_id(&id)?, req.status)
            .await?;
    Ok(Json(application))
}

/// DELETE /api/v1/applications/:id - Delete an application (employer only)
async fn delete_application(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    ApplicationService::delete(state.db(), &identity, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
