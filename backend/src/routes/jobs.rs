//! Job posting API routes
//!
//! Browsing postings is public; creating, updating and deleting them is
//! guarded and restricted to the employer who owns the posting.

use crate::auth::Identity;
use crate::error::{ApiError, ApiResult};
use crate::services::JobService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use jobkonnect_shared::types::{JobListQuery, JobListResponse, JobRequest, JobResponse};
use uuid::Uuid;

/// Create job routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/mine", get(list_my_jobs))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest("Invalid job id".to_string()))
}

/// GET /api/v1/jobs - List job postings with pagination
async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> ApiResult<Json<JobListResponse>> {
    let jobs = JobService::list(state.db(), query).await?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs - Create a job posting (employer only)
async fn create_job(
    State(state): State<AppState>,
    identity: Identity,
    Json(req): Json<JobRequest>,
) -> ApiResult<(StatusCode, Json<JobResponse>)> {
    let job = JobService::create(state.db(), &identity, req).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/mine - List the caller's own postings (employer only)
async fn list_my_jobs(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let jobs = JobService::list_mine(state.db(), &identity).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id - Get a job posting
async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobResponse>> {
    let job = JobService::get(state.db(), parse_id(&id)?).await?;
    Ok(Json(job))
}

/// PUT /api/v1/jobs/:id - Replace a job posting (owner only)
async fn update_job(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
    Json(req): Json<JobRequest>,
) -> ApiResult<Json<JobResponse>> {
    let job = JobService::update(state.db(), &identity, parse_id(&id)?, req).await?;
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id - Delete a job posting (owner only)
async fn delete_job(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    JobService::delete(state.db(), &identity, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
