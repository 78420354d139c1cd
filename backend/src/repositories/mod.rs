//! Data access layer
//!
//! Repositories own all SQL. They return plain records and leave
//! business rules (roles, ownership, validation) to the service layer.

mod application;
mod job;
mod user;

pub use application::{ApplicationRecord, ApplicationRepository, NewApplication};
pub use job::{JobRecord, JobRepository, NewJob};
pub use user::{NewUser, UserRecord, UserRepository};
