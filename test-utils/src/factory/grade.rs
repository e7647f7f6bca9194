//! Grade factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating grades for a student.
///
/// Defaults: subject `"Matemáticas"`, period `"2025-P1"`, score `4.0`, recorded now.
pub struct GradeFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    subject: String,
    period: String,
    score: f64,
    recorded_at: DateTime<Utc>,
}

impl<'a> GradeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            subject: "Matemáticas".to_string(),
            period: "2025-P1".to_string(),
            score: 4.0,
            recorded_at: Utc::now(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    pub async fn build(self) -> Result<entity::grade::Model, DbErr> {
        entity::grade::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            subject: ActiveValue::Set(self.subject),
            period: ActiveValue::Set(self.period),
            score: ActiveValue::Set(self.score),
            recorded_at: ActiveValue::Set(self.recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a grade with default values for the given student.
pub async fn create_grade(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::grade::Model, DbErr> {
    GradeFactory::new(db, student_id).build().await
}
