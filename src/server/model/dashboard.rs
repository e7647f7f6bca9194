//! Dashboard aggregates for teachers and families.

use crate::{
    model::dashboard::{
        ChildSummaryDto, FamilyDashboardDto, PendingTaskDto, TeacherDashboardDto, TeacherStatsDto,
    },
    server::model::{
        course::{Course, CourseSummary},
        message::MessageWithNames,
        student::Student,
    },
};

/// Attendance percentage reported when a student has no marks in the period.
pub const FULL_ATTENDANCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PendingTask {
    pub kind: String,
    pub course: String,
    pub description: String,
    pub urgency: String,
}

impl PendingTask {
    pub fn into_dto(self) -> PendingTaskDto {
        PendingTaskDto {
            tipo: self.kind,
            curso: self.course,
            descripcion: self.description,
            urgencia: self.urgency,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeacherDashboard {
    pub courses: Vec<CourseSummary>,
    pub unread_messages: Vec<MessageWithNames>,
    pub tasks: Vec<PendingTask>,
    pub total_courses: u64,
    pub unread_count: u64,
    pub total_students: u64,
}

impl TeacherDashboard {
    pub fn into_dto(self) -> TeacherDashboardDto {
        TeacherDashboardDto {
            cursos: self.courses.into_iter().map(CourseSummary::into_dto).collect(),
            mensajes_pendientes: self
                .unread_messages
                .into_iter()
                .map(MessageWithNames::into_dto)
                .collect(),
            tareas_pendientes: self.tasks.into_iter().map(PendingTask::into_dto).collect(),
            estadisticas: TeacherStatsDto {
                total_cursos: self.total_courses,
                mensajes_no_leidos: self.unread_count,
                estudiantes_total: self.total_students,
            },
        }
    }
}

/// Summary of one child shown on the family dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSummary {
    pub student: Student,
    pub course: Option<Course>,
    /// Mean of every recorded score, 0 when there are none.
    pub average: f64,
    pub grade_count: u64,
    /// Share of current-month marks that are `Presente`, 100 when there are none.
    pub attendance_percentage: f64,
    pub days_present: u64,
    pub total_days: u64,
    /// Observations dated within the last 30 days.
    pub recent_observations: u64,
}

impl ChildSummary {
    pub fn into_dto(self) -> ChildSummaryDto {
        let grado = self
            .course
            .as_ref()
            .map(Course::grade_label)
            .unwrap_or_else(|| "Sin grado".to_string());
        ChildSummaryDto {
            id: self.student.id,
            nombre: self.student.name,
            grado,
            curso: self.course.map(|c| c.name),
            curso_id: self.student.course_id,
            promedio: round_to(self.average, 2),
            total_notas: self.grade_count,
            asistencia_porcentaje: round_to(self.attendance_percentage, 1),
            dias_presentes: self.days_present,
            total_dias: self.total_days,
            observaciones_mes: self.recent_observations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FamilyDashboard {
    pub children: Vec<ChildSummary>,
}

impl FamilyDashboard {
    pub fn into_dto(self) -> FamilyDashboardDto {
        let total = self.children.len() as u64;
        FamilyDashboardDto {
            hijos: self.children.into_iter().map(ChildSummary::into_dto).collect(),
            total_hijos: total,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
