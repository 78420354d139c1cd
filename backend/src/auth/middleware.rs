//! Access guard middleware
//!
//! Validates the Bearer token on protected requests and extracts the
//! caller's identity before any resource handler runs. Rejections happen
//! here, so unauthorized calls never reach handler side effects.

use super::AuthError;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use jobkonnect_shared::models::UserRole;
use uuid::Uuid;

/// Authenticated caller identity extracted from a valid token
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl Identity {
    /// Require a specific role, rejecting with 403 otherwise
    pub fn require_role(&self, role: UserRole) -> Result<(), ApiError> {
        if self.role == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!(
                "This action requires the {} role",
                role
            )))
        }
    }
}

/// Pull the Bearer token out of the Authorization header
fn bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    header.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)
}

/// Turn verified claims into an Identity
fn identity_from_claims(claims: crate::auth::Claims) -> Result<Identity, AuthError> {
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSignature)?;
    Ok(Identity {
        user_id,
        username: claims.username,
        role: claims.role,
    })
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for Identity
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers)?;
        let claims = app_state.jwt().verify(token)?;

        Ok(identity_from_claims(claims)?)
    }
}

/// Middleware function form of the guard (alternative to the extractor)
///
/// Use this when auth should apply to a whole route group via layer.
/// The Identity lands in request extensions.
#[allow(dead_code)]
pub async fn auth_middleware(
    state: AppState,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let claims = state.jwt().verify(token)?;
    let identity = identity_from_claims(claims)?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role_matches() {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            username: "acme".to_string(),
            role: UserRole::Employer,
        };
        assert!(identity.require_role(UserRole::Employer).is_ok());
        assert!(identity.require_role(UserRole::JobSeeker).is_err());
    }

    #[test]
    fn test_identity_rejects_non_uuid_subject() {
        let claims = crate::auth::Claims {
            sub: "not-a-uuid".to_string(),
            username: "jdoe".to_string(),
            role: UserRole::JobSeeker,
            exp: 0,
            iat: 0,
        };
        assert_eq!(
            identity_from_claims(claims).unwrap_err(),
            AuthError::InvalidSignature
        );
    }
}
