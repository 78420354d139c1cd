//! Job application service
//!
//! Job seekers apply to postings, at most once per job. Employers review
//! applications submitted to their postings and manage their status.

use crate::auth::Identity;
use crate::error::ApiError;
use crate::repositories::{
    ApplicationRecord, ApplicationRepository, JobRepository, NewApplication,
};
use jobkonnect_shared::models::{ApplicationStatus, UserRole};
use jobkonnect_shared::types::{ApplicationRequest, ApplicationResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Job application service
pub struct ApplicationService;

impl ApplicationService {
    /// Submit an application (job seeker only, one per job)
    pub async fn create(
        pool: &PgPool,
        identity: &Identity,
        req: ApplicationRequest,
    ) -> Result<ApplicationResponse, ApiError> {
        identity.require_role(UserRole::JobSeeker)?;
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let job_id = Uuid::parse_str(&req.job_id)
            .map_err(|_| ApiError::BadRequest("Invalid job id".to_string()))?;

        let job = JobRepository::find_by_id(pool, job_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

        if ApplicationRepository::exists_for_user_and_job(pool, identity.user_id, job_id)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(
                "You have already applied for this job".to_string(),
            ));
        }

        let application = ApplicationRepository::create(
            pool,
            NewApplication {
                job_id,
                employer_id: job.employer_id,
                user_id: identity.user_id,
                name: req.name,
                years_of_experience: req.years_of_experience,
                resume: req.resume,
                cover_letter: req.cover_letter,
                school_name: req.school_name,
                portfolio: req.portfolio,
                skills: req.skills,
            },
        )
        .await
        // The duplicate check above races with concurrent submissions;
        // a lost race trips the (user_id, job_id) unique constraint
        .map_err(|e| {
            ApiError::from_insert_error(e, "You have already applied for this job")
        })?;

        Self::to_response(application)
    }

    /// List applications visible to the caller
    ///
    /// Employers see applications submitted to their postings; job
    /// seekers see their own submissions.
    pub async fn list(
        pool: &PgPool,
        identity: &Identity,
    ) -> Result<Vec<ApplicationResponse>, ApiError> {
        let records = match identity.role {
            UserRole::Employer => {
                ApplicationRepository::list_by_employer(pool, identity.user_id).await
            }
            UserRole::JobSeeker => {
                ApplicationRepository::list_by_user(pool, identity.user_id).await
            }
        }
        .map_err(ApiError::Internal)?;

        records.into_iter().map(Self::to_response).collect()
    }

    /// Get a single application
    ///
    /// Visible only to the applicant and the employer it was sent to.
    pub async fn get(
        pool: &PgPool,
        identity: &Identity,
        id: Uuid,
    ) -> Result<ApplicationResponse, ApiError> {
        let application = Self::find_visible(pool, identity, id).await?;
        Self::to_response(application)
    }

    /// Update an application's status (receiving employer only)
    pub async fn update_status(
        pool: &PgPool,
        identity: &Identity,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<ApplicationResponse, ApiError> {
        identity.require_role(UserRole::Employer)?;
        Self::check_employer_ownership(pool, identity, id).await?;

        let application = ApplicationRepository::update_status(pool, id, status.as_str())
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

        Self::to_response(application)
    }

    /// Delete an application (receiving employer only)
    pub async fn delete(pool: &PgPool, identity: &Identity, id: Uuid) -> Result<(), ApiError> {
        identity.require_role(UserRole::Employer)?;
        Self::check_employer_ownership(pool, identity, id).await?;

        let deleted = ApplicationRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Application not found".to_string()));
        }
        Ok(())
    }

    async fn find_visible(
        pool: &PgPool,
        identity: &Identity,
        id: Uuid,
    ) -> Result<ApplicationRecord, ApiError> {
        let application = ApplicationRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

        let visible = match identity.role {
            UserRole::Employer => application.employer_id == identity.user_id,
            UserRole::JobSeeker => application.user_id == identity.user_id,
        };
        if !visible {
            return Err(ApiError::Forbidden(
                "You may not view this application".to_string(),
            ));
        }
        Ok(application)
    }

    async fn check_employer_ownership(
        pool: &PgPool,
        identity: &Identity,
        id: Uuid,
    ) -> Result<(), ApiError> {
        let application = ApplicationRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?;

        if application.employer_id != identity.user_id {
            return Err(ApiError::Forbidden(
                "Only the receiving employer may manage this application".to_string(),
            ));
        }
        Ok(())
    }

    fn to_response(application: ApplicationRecord) -> Result<ApplicationResponse, ApiError> {
        let status = application.status.parse::<ApplicationStatus>().map_err(|e| {
            ApiError::Internal(anyhow::anyhow!("Corrupt application status in database: {}", e))
        })?;

        Ok(ApplicationResponse {
            id: application.id.to_string(),
            job_id: application.job_id.to_string(),
            employer_id: application.employer_id.to_string(),
            user_id: application.user_id.to_string(),
            name: application.name,
            years_of_experience: application.years_of_experience,
            resume: application.resume,
            cover_letter: application.cover_letter,
            school_name: application.school_name,
            portfolio: application.portfolio,
            skills: application.skills,
            status,
            created_at: application.created_at,
            updated_at: application.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered in backend/tests/
}
