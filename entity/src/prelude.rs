pub use super::attendance::Entity as Attendance;
pub use super::course::Entity as Course;
pub use super::grade::Entity as Grade;
pub use super::message::Entity as Message;
pub use super::observation::Entity as Observation;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
