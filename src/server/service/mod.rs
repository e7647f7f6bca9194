//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership rules and defaults
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running batch upserts and guarded deletes atomically

pub mod attendance;
pub mod auth;
pub mod course;
pub mod dashboard;
pub mod grade;
pub mod message;
pub mod observation;
pub mod student;
pub mod task_feed;
pub mod user;

#[cfg(test)]
mod test;
