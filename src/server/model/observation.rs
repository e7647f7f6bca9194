//! Observation domain models and parameters.

use chrono::NaiveDate;
use entity::observation::ObservationType;
use sea_orm::ActiveEnum;

use crate::model::observation::ObservationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub id: i32,
    pub student_id: i32,
    pub teacher_id: i32,
    pub date: NaiveDate,
    pub kind: ObservationType,
    pub detail: String,
}

impl Observation {
    pub fn from_entity(entity: entity::observation::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            teacher_id: entity.teacher_id,
            date: entity.date,
            kind: entity.kind,
            detail: entity.detail,
        }
    }

    pub fn into_dto(self) -> ObservationDto {
        ObservationDto {
            id: self.id,
            estudiante_id: self.student_id,
            docente_id: self.teacher_id,
            fecha: self.date,
            tipo: self.kind.to_value(),
            detalle: self.detail,
            estudiante_nombre: None,
            docente_nombre: None,
        }
    }
}

/// Observation enriched with the student's and the author's names.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationWithNames {
    pub observation: Observation,
    pub student_name: Option<String>,
    pub teacher_name: Option<String>,
}

impl ObservationWithNames {
    pub fn into_dto(self) -> ObservationDto {
        ObservationDto {
            estudiante_nombre: self.student_name,
            docente_nombre: self.teacher_name,
            ..self.observation.into_dto()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateObservationParams {
    pub student_id: i32,
    pub teacher_id: i32,
    pub date: NaiveDate,
    pub kind: ObservationType,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateObservationParams {
    pub date: Option<NaiveDate>,
    pub kind: Option<ObservationType>,
    pub detail: Option<String>,
}

/// Filters for the observation listing. Date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct ObservationFilter {
    pub student_id: Option<i32>,
    pub kind: Option<ObservationType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Observation as submitted by a caller. The author defaults to the caller.
#[derive(Debug, Clone)]
pub struct AddObservationParams {
    pub student_id: i32,
    pub teacher_id: Option<i32>,
    pub date: NaiveDate,
    pub kind: ObservationType,
    pub detail: String,
}
