//! Wire types shared by every HTTP endpoint.
//!
//! Field names follow the JSON contract consumed by the school portal, which mixes Spanish
//! snake_case keys with a few camelCase ones (`estudianteId`, `receptorId`).

pub mod api;
pub mod attendance;
pub mod auth;
pub mod course;
pub mod dashboard;
pub mod grade;
pub mod message;
pub mod observation;
pub mod student;
pub mod user;
