//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let course = factory::create_course(&db).await?;
//! let student = factory::create_student(&db, course.id).await?;
//! let teacher = factory::user::UserFactory::new(&db).docente().build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Accounts of every role
//! - `course` - Courses
//! - `student` - Students enrolled in a course
//! - `grade` - Grades for a student
//! - `attendance` - Attendance marks for a student
//! - `observation` - Teacher observations about a student
//! - `message` - Direct messages between users
//! - `helpers` - ID generation and multi-entity setups

pub mod attendance;
pub mod course;
pub mod grade;
pub mod helpers;
pub mod message;
pub mod observation;
pub mod student;
pub mod user;

pub use attendance::create_attendance;
pub use course::create_course;
pub use grade::create_grade;
pub use message::create_message;
pub use observation::create_observation;
pub use student::create_student;
pub use user::create_user;
