//! Application repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Application record from database
///
/// `status` is stored as text; the service layer parses it into
/// `ApplicationStatus`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub job_id: Uuid,
    pub employer_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub years_of_experience: Option<i32>,
    pub resume: String,
    pub cover_letter: String,
    pub school_name: Option<String>,
    pub portfolio: Option<String>,
    pub skills: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an application
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub employer_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub years_of_experience: Option<i32>,
    pub resume: String,
    pub cover_letter: String,
    pub school_name: Option<String>,
    pub portfolio: Option<String>,
    pub skills: String,
}

/// Application repository for database operations
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Create a new application with status `pending`
    pub async fn create(pool: &PgPool, input: NewApplication) -> Result<ApplicationRecord> {
        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            INSERT INTO applications (
                job_id, employer_id, user_id, name, years_of_experience,
                resume, cover_letter, school_name, portfolio, skills
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, job_id, employer_id, user_id, name, years_of_experience,
                      resume, cover_letter, school_name, portfolio, skills, status,
                      created_at, updated_at
            "#,
        )
        .bind(input.job_id)
        .bind(input.employer_id)
        .bind(input.user_id)
        .bind(&input.name)
        .bind(input.years_of_experience)
        .bind(&input.resume)
        .bind(&input.cover_letter)
        .bind(&input.school_name)
        .bind(&input.portfolio)
        .bind(&input.skills)
        .fetch_one(pool)
        .await?;

        Ok(application)
    }

    /// Find application by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ApplicationRecord>> {
        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT id, job_id, employer_id, user_id, name, years_of_experience,
                   resume, cover_letter, school_name, portfolio, skills, status,
                   created_at, updated_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(application)
    }

    /// Check whether a user already applied to a job
    pub async fn exists_for_user_and_job(
        pool: &PgPool,
        user_id: Uuid,
        job_id: Uuid,
    ) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM applications WHERE user_id = $1 AND job_id = $2)
            "#,
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// List applications submitted by a job seeker
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ApplicationRecord>> {
        let applications = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT id, job_id, employer_id, user_id, name, years_of_experience,
                   resume, cover_letter, school_name, portfolio, skills, status,
                   created_at, updated_at
            FROM applications
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(applications)
    }

    /// List applications received by an employer
    pub async fn list_by_employer(
        pool: &PgPool,
        employer_id: Uuid,
    ) -> Result<Vec<ApplicationRecord>> {
        let applications = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT id, job_id, employer_id, user_id, name, years_of_experience,
                   resume, cover_letter, school_name, portfolio, skills, status,
                   created_at, updated_at
            FROM applications
            WHERE employer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(employer_id)
        .fetch_all(pool)
        .await?;

        Ok(applications)
    }

    /// Update an application's status
    pub async fn update_status(
        pool: &PgPool,
        id: Uuid,
        status: &str,
    ) -> Result<Option<ApplicationRecord>> {
        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            UPDATE applications SET
                status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, job_id, employer_id, user_id, name, years_of_experience,
                      resume, cover_letter, school_name, portfolio, skills, status,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(application)
    }

    /// Delete an application. Returns false when no such application exists.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
