//! Job repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Job record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRecord {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    pub application_deadline: DateTime<Utc>,
    pub skills_required: String,
    pub preferred_qualifications: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or replacing a job posting
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    pub application_deadline: DateTime<Utc>,
    pub skills_required: String,
    pub preferred_qualifications: Option<String>,
}

/// Job repository for database operations
pub struct JobRepository;

impl JobRepository {
    /// Create a new job posting
    pub async fn create(pool: &PgPool, employer_id: Uuid, input: NewJob) -> Result<JobRecord> {
        let job = sqlx::query_as::<_, JobRecord>(
            r#"
            INSERT INTO jobs (
                employer_id, title, description, requirements, salary, location,
                job_type, application_deadline, skills_required, preferred_qualifications
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, employer_id, title, description, requirements, salary, location,
                      job_type, application_deadline, skills_required,
                      preferred_qualifications, created_at, updated_at
            "#,
        )
        .bind(employer_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(input.salary)
        .bind(&input.location)
        .bind(&input.job_type)
        .bind(input.application_deadline)
        .bind(&input.skills_required)
        .bind(&input.preferred_qualifications)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }

    /// Find job by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT id, employer_id, title, description, requirements, salary, location,
                   job_type, application_deadline, skills_required,
                   preferred_qualifications, created_at, updated_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// List job postings, newest first, with the total count for pagination
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<(Vec<JobRecord>, i64)> {
        let jobs = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT id, employer_id, title, description, requirements, salary, location,
                   job_type, application_deadline, skills_required,
                   preferred_qualifications, created_at, updated_at
            FROM jobs
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await?;

        Ok((jobs, total))
    }

    /// List all jobs posted by one employer
    pub async fn list_by_employer(pool: &PgPool, employer_id: Uuid) -> Result<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT id, employer_id, title, description, requirements, salary, location,
                   job_type, application_deadline, skills_required,
                   preferred_qualifications, created_at, updated_at
            FROM jobs
            WHERE employer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(employer_id)
        .fetch_all(pool)
        .await?;

        Ok(jobs)
    }

    /// Replace a job posting's fields
    pub async fn update(pool: &PgPool, id: Uuid, input: NewJob) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(
            r#"
            UPDATE jobs SET
                title = $2,
                description = $3,
                requirements = $4,
                salary = $5,
                location = $6,
                job_type = $7,
                application_deadline = $8,
                skills_required = $9,
                preferred_qualifications = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, employer_id, title, description, requirements, salary, location,
                      job_type, application_deadline, skills_required,
                      preferred_qualifications, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.requirements)
        .bind(input.salary)
        .bind(&input.location)
        .bind(&input.job_type)
        .bind(input.application_deadline)
        .bind(&input.skills_required)
        .bind(&input.preferred_qualifications)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// Delete a job posting
    ///
    /// Applications referencing the job are removed by the ON DELETE
    /// CASCADE constraint. Returns false when no such job exists.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
