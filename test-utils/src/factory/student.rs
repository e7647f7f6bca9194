//! Student factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating students enrolled in a course.
///
/// Defaults: name `"Estudiante {id}"`.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    name: String,
}

impl<'a> StudentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        Self {
            db,
            course_id,
            name: format!("Estudiante {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            course_id: ActiveValue::Set(self.course_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given course.
pub async fn create_student(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, course_id).build().await
}
