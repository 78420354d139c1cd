//! API request and response types

use crate::models::{ApplicationStatus, UserRole};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Issued token response
///
/// A single stateless access token; validity is purely signature + expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until expiry
    pub expires_in: i64,
    /// Absolute expiry timestamp
    pub expires_at: DateTime<Utc>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
///
/// `first_name`/`last_name` are required for job seekers,
/// `company_name`/`website`/`contact_info` for employers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub phone_number: String,
    pub address: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub phone_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Job Types
// ============================================================================

/// Create or replace a job posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    pub application_deadline: DateTime<Utc>,
    pub skills_required: String,
    #[serde(default)]
    pub preferred_qualifications: Option<String>,
}

/// Job posting response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: String,
    pub employer_id: String,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: Decimal,
    pub location: String,
    pub job_type: String,
    pub application_deadline: DateTime<Utc>,
    pub skills_required: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_qualifications: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job listing query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobListQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl JobListQuery {
    /// Clamp pagination to sane bounds (default 50, max 100)
    pub fn normalize(self) -> Self {
        Self {
            limit: Some(self.limit.unwrap_or(50).clamp(1, 100)),
            offset: Some(self.offset.unwrap_or(0).max(0)),
        }
    }
}

/// Job listing response with pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub items: Vec<JobResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

// ============================================================================
// Application Types
// ============================================================================

/// Submit an application for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationRequest {
    pub job_id: String,
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 80, message = "Years of experience out of range"))]
    pub years_of_experience: Option<i32>,
    pub resume: String,
    pub cover_letter: String,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Portfolio must be a valid URL"))]
    pub portfolio: Option<String>,
    pub skills: String,
}

/// Application response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub job_id: String,
    pub employer_id: String,
    pub user_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
    pub resume: String,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    pub skills: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update the status of an application (employer only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}
