//! SeaORM entities for the school management schema.
//!
//! Table and column names follow the existing database (`usuarios`, `cursos`, ...), while the
//! Rust side uses English field names mapped through `column_name`.

pub mod prelude;

pub mod attendance;
pub mod course;
pub mod grade;
pub mod message;
pub mod observation;
pub mod student;
pub mod user;
