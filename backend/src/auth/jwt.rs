//! JWT token issuance and validation
//!
//! Tokens are stateless: validity is purely a function of signature and
//! expiry, there is no server-side session state and no revocation list.
//! Keys are pre-computed once at startup and shared via `AppState`.

use super::AuthError;
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use jobkonnect_shared::models::UserRole;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username of the account
    pub username: String,
    /// Account role
    pub role: UserRole,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// A freshly issued token together with its validity window
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Pre-computed JWT keys for efficient token operations
///
/// These are expensive to derive, so they are built once at startup
/// and cached in AppState.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from the signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token issuance and validation
///
/// Uses HS256 with a shared secret. The secret is injected as explicit
/// configuration at construction, never read from ambient global state.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState,
    /// not per-request.
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Issue a signed token binding the account identity
    ///
    /// The expiry is always strictly in the future relative to issuance.
    pub fn issue(&self, user_id: Uuid, username: &str, role: UserRole) -> Result<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at,
        })
    }

    /// Validate a token and return its claims
    ///
    /// Succeeds if and only if the signature verifies against the server
    /// key and the current time is before the expiry. An expired token
    /// with a valid signature fails with `Expired`; any signature
    /// mismatch or structural problem fails with `InvalidSignature`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        // No clock leeway: a token is expired the moment `exp` passes
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.keys.decoding, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                    _ => AuthError::InvalidSignature,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Token expiry window in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}
