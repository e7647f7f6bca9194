//! Schoolboard Test Utils
//!
//! Shared testing utilities for the schoolboard backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases plus factories for every school entity.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_students() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_school_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (course, student) = factory::helpers::create_student_with_course(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
