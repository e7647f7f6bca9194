//! Grade domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{
    api::BatchSummaryDto,
    grade::{GradeDto, GradeEntryDto},
};

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score.
pub const MAX_SCORE: f64 = 5.0;

pub fn score_in_range(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: i32,
    pub student_id: i32,
    pub subject: String,
    pub period: String,
    pub score: f64,
    pub recorded_at: DateTime<Utc>,
}

impl Grade {
    pub fn from_entity(entity: entity::grade::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            subject: entity.subject,
            period: entity.period,
            score: entity.score,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> GradeDto {
        GradeDto {
            id: self.id,
            estudiante_id: self.student_id,
            asignatura: self.subject,
            periodo: self.period,
            nota: self.score,
            fecha_registro: self.recorded_at,
            estudiante_nombre: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeWithStudent {
    pub grade: Grade,
    pub student_name: Option<String>,
}

impl GradeWithStudent {
    pub fn from_entity(
        (grade, student): (entity::grade::Model, Option<entity::student::Model>),
    ) -> Self {
        Self {
            grade: Grade::from_entity(grade),
            student_name: student.map(|s| s.name),
        }
    }

    pub fn into_dto(self) -> GradeDto {
        GradeDto {
            estudiante_nombre: self.student_name,
            ..self.grade.into_dto()
        }
    }
}

/// A validated grade for one `(student, subject, period)` key.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeEntry {
    pub student_id: i32,
    pub subject: String,
    pub period: String,
    pub score: f64,
}

impl GradeEntry {
    /// Parses one raw batch element.
    ///
    /// Returns `None` for elements with missing or mistyped fields, blank subject or period,
    /// or a score outside `[MIN_SCORE, MAX_SCORE]`.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        let dto: GradeEntryDto = serde_json::from_value(value).ok()?;
        let subject = dto.asignatura.trim().to_string();
        let period = dto.periodo.trim().to_string();

        if subject.is_empty() || period.is_empty() || !score_in_range(dto.nota) {
            return None;
        }

        Some(Self {
            student_id: dto.estudiante_id,
            subject,
            period,
            score: dto.nota,
        })
    }
}

/// Partial grade update. Changing subject or period must not collide with another grade
/// of the same student.
#[derive(Debug, Clone, Default)]
pub struct UpdateGradeParams {
    pub subject: Option<String>,
    pub period: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct GradeFilter {
    pub student_id: Option<i32>,
    pub subject: Option<String>,
    pub period: Option<String>,
}

/// Counts produced by a batch upsert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub created: u64,
    pub updated: u64,
    pub skipped: u64,
}

impl BatchOutcome {
    pub fn saved(&self) -> u64 {
        self.created + self.updated
    }

    pub fn into_dto(self) -> BatchSummaryDto {
        BatchSummaryDto {
            creados: self.created,
            actualizados: self.updated,
            omitidos: self.skipped,
        }
    }
}
