//! Authentication error kinds
//!
//! Every failure mode of credential verification and token validation.
//! All of these are recoverable at the request boundary: they map to a
//! rejected request, never a process-fatal condition.

use thiserror::Error;

/// Authentication and authorization failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No account exists for the presented identifier
    #[error("account not found")]
    NotFound,

    /// The presented credential does not match the stored hash
    #[error("invalid credential")]
    InvalidCredential,

    /// No token was presented in the Authorization header
    #[error("missing authentication token")]
    MissingToken,

    /// Token signature mismatch or malformed token structure
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token signature is valid but the expiry has passed
    #[error("token expired")]
    Expired,
}
