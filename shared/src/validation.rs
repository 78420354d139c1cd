//! Input validation functions
//!
//! Validation utilities for registration and job posting input.
//! Uses both custom validators and the `validator` crate for derive macros.

use crate::models::UserRole;
use crate::types::RegisterRequest;
use rust_decimal::Decimal;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if username.len() > 64 {
        return Err("Username too long".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err("Username may only contain letters, digits, '_', '-' and '.'".to_string());
    }
    Ok(())
}

/// Validate a job salary
pub fn validate_salary(salary: Decimal) -> Result<(), String> {
    if salary < Decimal::ZERO {
        return Err("Salary cannot be negative".to_string());
    }
    Ok(())
}

/// Validate the role-specific profile fields of a registration request
///
/// Job seekers must supply first and last name; employers must supply
/// company name, website and contact info.
pub fn validate_role_fields(req: &RegisterRequest) -> Result<(), String> {
    match req.role {
        UserRole::JobSeeker => {
            if req.first_name.as_deref().map_or(true, str::is_empty) {
                return Err("First name is required for job seekers".to_string());
            }
            if req.last_name.as_deref().map_or(true, str::is_empty) {
                return Err("Last name is required for job seekers".to_string());
            }
        }
        UserRole::Employer => {
            if req.company_name.as_deref().map_or(true, str::is_empty) {
                return Err("Company name is required for employers".to_string());
            }
            if req.website.as_deref().map_or(true, str::is_empty) {
                return Err("Website is required for employers".to_string());
            }
            if req.contact_info.as_deref().map_or(true, str::is_empty) {
                return Err("Contact info is required for employers".to_string());
            }
        }
    }
    Ok(())
}
