//! Job posting service
//!
//! Business rules for the job board: only employers create postings,
//! only the posting owner may update or delete it.

use crate::auth::Identity;
use crate::error::ApiError;
use crate::repositories::{JobRecord, JobRepository, NewJob};
use jobkonnect_shared::models::UserRole;
use jobkonnect_shared::types::{JobListQuery, JobListResponse, JobRequest, JobResponse};
use jobkonnect_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;

/// Job posting service
pub struct JobService;

impl JobService {
    /// Create a job posting (employer only)
    pub async fn create(
        pool: &PgPool,
        identity: &Identity,
        req: JobRequest,
    ) -> Result<JobResponse, ApiError> {
        identity.require_role(UserRole::Employer)?;
        let input = Self::validate_input(req)?;

        let job = JobRepository::create(pool, identity.user_id, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::to_response(job))
    }

    /// List job postings with pagination
    pub async fn list(pool: &PgPool, query: JobListQuery) -> Result<JobListResponse, ApiError> {
        let query = query.normalize();
        let limit = query.limit.unwrap_or(50);
        let offset = query.offset.unwrap_or(0);

        let (jobs, total) = JobRepository::list(pool, limit, offset)
            .await
            .map_err(ApiError::Internal)?;

        Ok(JobListResponse {
            items: jobs.into_iter().map(Self::to_response).collect(),
            total,
            limit,
            offset,
        })
    }

    /// Get a single job posting
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<JobResponse, ApiError> {
        let job = JobRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

        Ok(Self::to_response(job))
    }

    /// List the caller's own postings (employer only)
    pub async fn list_mine(
        pool: &PgPool,
        identity: &Identity,
    ) -> Result<Vec<JobResponse>, ApiError> {
        identity.require_role(UserRole::Employer)?;

        let jobs = JobRepository::list_by_employer(pool, identity.user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(jobs.into_iter().map(Self::to_response).collect())
    }

    /// Replace a job posting (owner only)
    pub async fn update(
        pool: &PgPool,
        identity: &Identity,
        id: Uuid,
        req: JobRequest,
    ) -> Result<JobResponse, ApiError> {
        identity.require_role(UserRole::Employer)?;
        Self::check_ownership(pool, identity, id).await?;

        let input = Self::validate_input(req)?;
        let job = JobRepository::update(pool, id, input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

        Ok(Self::to_response(job))
    }

    /// Delete a job posting and its applications (owner only)
    pub async fn delete(pool: &PgPool, identity: &Identity, id: Uuid) -> Result<(), ApiError> {
        identity.require_role(UserRole::Employer)?;
        Self::check_ownership(pool, identity, id).await?;

        let deleted = JobRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    async fn check_ownership(
        pool: &PgPool,
        identity: &Identity,
        job_id: Uuid,
    ) -> Result<(), ApiError> {
        let job = JobRepository::find_by_id(pool, job_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

        if job.employer_id != identity.user_id {
            return Err(ApiError::Forbidden(
                "Only the posting employer may modify this job".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_input(req: JobRequest) -> Result<NewJob, ApiError> {
        if req.title.trim().is_empty() {
            return Err(ApiError::Validation("Job title cannot be empty".to_string()));
        }
        if req.description.trim().is_empty() {
            return Err(ApiError::Validation(
                "Job description cannot be empty".to_string(),
            ));
        }
        validation::validate_salary(req.salary).map_err(ApiError::Validation)?;

        Ok(NewJob {
            title: req.title,
            description: req.description,
            requirements: req.requirements,
            salary: req.salary,
            location: req.location,
            job_type: req.job_type,
            application_deadline: req.application_deadline,
            skills_required: req.skills_required,
            preferred_qualifications: req.preferred_qualifications,
        })
    }

    fn to_response(job: JobRecord) -> JobResponse {
        JobResponse {
            id: job.id.to_string(),
            employer_id: job.employer_id.to_string(),
            title: job.title,
            description: job.description,
            requirements: job.requirements,
            salary: job.salary,
            location: job.location,
            job_type: job.job_type,
            application_deadline: job.application_deadline,
            skills_required: job.skills_required,
            preferred_qualifications: job.preferred_qualifications,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
