//! JobKonnect Shared Library
//!
//! This crate contains the types, models, and validation utilities shared
//! between the backend and any API clients.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::*;
pub use types::*;
