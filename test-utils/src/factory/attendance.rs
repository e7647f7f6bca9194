//! Attendance factory.

use chrono::{NaiveDate, Utc};
use entity::attendance::AttendanceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance marks.
///
/// Defaults: today's date, status `Presente`.
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    date: NaiveDate,
    status: AttendanceStatus,
}

impl<'a> AttendanceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            date: Utc::now().date_naive(),
            status: AttendanceStatus::Present,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `Presente` mark for today.
pub async fn create_attendance(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, student_id).build().await
}
