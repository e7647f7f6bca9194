//! HTTP request handlers.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! turn DTOs into service parameters, and wrap results in the `{success, data}` envelope.

pub mod attendance;
pub mod auth;
pub mod course;
pub mod dashboard;
pub mod grade;
pub mod health;
pub mod message;
pub mod observation;
pub mod student;
pub mod user;

#[cfg(test)]
mod test;
