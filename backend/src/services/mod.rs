//! Business logic layer
//!
//! Services enforce validation, roles and ownership on top of the
//! repositories, and translate records into API responses.

mod application;
mod job;
mod user;

pub use application::ApplicationService;
pub use job::JobService;
pub use user::UserService;
