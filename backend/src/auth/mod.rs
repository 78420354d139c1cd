//! Authentication module
//!
//! JWT-based credential issuance and request guarding with argon2
//! password hashing.

mod error;
mod jwt;
mod middleware;
mod password;

pub use error::AuthError;
pub use jwt::{Claims, IssuedToken, JwtService};
pub use middleware::{auth_middleware, Identity};
pub use password::PasswordService;
