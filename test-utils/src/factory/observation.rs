//! Observation factory.

use chrono::{NaiveDate, Utc};
use entity::observation::ObservationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating observations.
///
/// Defaults: today's date, type `NEUTRAL`, detail `"Observación de prueba"`.
pub struct ObservationFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    teacher_id: i32,
    date: NaiveDate,
    kind: ObservationType,
    detail: String,
}

impl<'a> ObservationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32, teacher_id: i32) -> Self {
        Self {
            db,
            student_id,
            teacher_id,
            date: Utc::now().date_naive(),
            kind: ObservationType::Neutral,
            detail: "Observación de prueba".to_string(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn kind(mut self, kind: ObservationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub async fn build(self) -> Result<entity::observation::Model, DbErr> {
        entity::observation::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            date: ActiveValue::Set(self.date),
            kind: ActiveValue::Set(self.kind),
            detail: ActiveValue::Set(self.detail),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an observation with default values.
pub async fn create_observation(
    db: &DatabaseConnection,
    student_id: i32,
    teacher_id: i32,
) -> Result<entity::observation::Model, DbErr> {
    ObservationFactory::new(db, student_id, teacher_id)
        .build()
        .await
}
