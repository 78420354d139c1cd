//! User service for registration, authentication and profiles
//!
//! The credential issuer lives here: `authenticate` looks up the account
//! and verifies the presented credential, `login` turns a successful
//! authentication into a signed, time-bounded token.

use crate::auth::{AuthError, JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserRecord, UserRepository};
use jobkonnect_shared::models::UserRole;
use jobkonnect_shared::types::{AuthTokens, RegisterRequest, UserProfile};
use jobkonnect_shared::validation;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue their first token
    ///
    /// Password hashing is offloaded to the blocking thread pool.
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: RegisterRequest,
    ) -> Result<AuthTokens, ApiError> {
        validation::validate_username(&req.username).map_err(ApiError::Validation)?;
        validation::validate_email(&req.email).map_err(ApiError::Validation)?;
        validation::validate_password(&req.password).map_err(ApiError::Validation)?;
        validation::validate_role_fields(&req).map_err(ApiError::Validation)?;
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        if UserRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }
        if UserRepository::username_exists(pool, &req.username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            NewUser {
                username: req.username,
                email: req.email,
                password_hash,
                role: req.role.to_string(),
                phone_number: req.phone_number,
                address: req.address,
                first_name: req.first_name,
                last_name: req.last_name,
                company_name: req.company_name,
                website: req.website,
                contact_info: req.contact_info,
            },
        )
        .await
        // The existence checks above race with concurrent registrations;
        // a lost race trips the unique constraint instead
        .map_err(|e| ApiError::from_insert_error(e, "Email or username already registered"))?;

        Self::issue_tokens(jwt_service, &user)
    }

    /// Authenticate a login attempt
    ///
    /// Preserves the distinct failure kinds: an unknown identifier is
    /// `ApiError::Auth(AuthError::NotFound)`, a credential mismatch is
    /// `ApiError::Auth(AuthError::InvalidCredential)`. Only the rendered
    /// 401 response collapses the two.
    pub async fn authenticate(
        pool: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(AuthError::NotFound)?;

        // Constant-time verification on the blocking thread pool
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthError::InvalidCredential.into());
        }

        Ok(user)
    }

    /// Login with email and password, issuing a fresh token
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        let user = Self::authenticate(pool, email, password).await?;
        Self::issue_tokens(jwt_service, &user)
    }

    /// Get a user profile
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Self::to_profile(user)
    }

    /// List all user profiles
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserProfile>, ApiError> {
        let users = UserRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)?;

        users.into_iter().map(Self::to_profile).collect()
    }

    fn issue_tokens(jwt_service: &JwtService, user: &UserRecord) -> Result<AuthTokens, ApiError> {
        let role = Self::parse_role(&user.role)?;
        let issued = jwt_service
            .issue(user.id, &user.username, role)
            .map_err(ApiError::Internal)?;

        Ok(AuthTokens {
            access_token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.expiry_secs(),
            expires_at: issued.expires_at,
        })
    }

    fn parse_role(role: &str) -> Result<UserRole, ApiError> {
        role.parse::<UserRole>()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Corrupt role in database: {}", e)))
    }

    fn to_profile(user: UserRecord) -> Result<UserProfile, ApiError> {
        let role = Self::parse_role(&user.role)?;
        Ok(UserProfile {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            role,
            phone_number: user.phone_number,
            address: user.address,
            first_name: user.first_name,
            last_name: user.last_name,
            company_name: user.company_name,
            website: user.website,
            contact_info: user.contact_info,
            created_at: user.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered in backend/tests/
}
