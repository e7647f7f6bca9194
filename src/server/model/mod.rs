//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated input
//! for a single service operation.

pub mod attendance;
pub mod auth;
pub mod course;
pub mod dashboard;
pub mod grade;
pub mod message;
pub mod observation;
pub mod pagination;
pub mod student;
pub mod user;
