//! Attendance domain models and parameters.

use chrono::NaiveDate;
use entity::attendance::AttendanceStatus;
use sea_orm::ActiveEnum;

use crate::{
    model::attendance::{AttendanceDto, AttendanceEntryDto, AttendanceStatsDto},
    server::util::parse::{parse_attendance_status, parse_date},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i32,
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            date: entity.date,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            estudiante_id: self.student_id,
            fecha: self.date,
            estado: self.status.to_value(),
            estudiante_nombre: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceWithStudent {
    pub record: AttendanceRecord,
    pub student_name: Option<String>,
}

impl AttendanceWithStudent {
    pub fn from_entity(
        (record, student): (entity::attendance::Model, Option<entity::student::Model>),
    ) -> Self {
        Self {
            record: AttendanceRecord::from_entity(record),
            student_name: student.map(|s| s.name),
        }
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            estudiante_nombre: self.student_name,
            ..self.record.into_dto()
        }
    }
}

/// A validated attendance mark for one `(student, date)` key.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceEntry {
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceEntry {
    /// Parses one raw batch element, returning `None` when any field is missing or invalid.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        let dto: AttendanceEntryDto = serde_json::from_value(value).ok()?;

        Some(Self {
            student_id: dto.estudiante_id,
            date: parse_date(&dto.fecha).ok()?,
            status: parse_attendance_status(&dto.estado).ok()?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub student_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

/// Per-course attendance totals for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStats {
    pub total_students: u64,
    pub by_status: Vec<(AttendanceStatus, u64)>,
}

impl AttendanceStats {
    /// Students with a mark on the date; equals the sum of the per-status counts.
    pub fn recorded(&self) -> u64 {
        self.by_status.iter().map(|(_, count)| count).sum()
    }

    pub fn pending(&self) -> u64 {
        self.total_students.saturating_sub(self.recorded())
    }

    pub fn into_dto(self) -> AttendanceStatsDto {
        AttendanceStatsDto {
            total_estudiantes: self.total_students,
            registrados: self.recorded(),
            pendientes: self.pending(),
            por_estado: self
                .by_status
                .into_iter()
                .map(|(status, count)| (status.to_value(), count))
                .collect(),
        }
    }
}
