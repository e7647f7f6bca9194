use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{course::CourseSummaryDto, message::MessageDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PendingTaskDto {
    pub tipo: String,
    pub curso: String,
    pub descripcion: String,
    pub urgencia: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherStatsDto {
    pub total_cursos: u64,
    pub mensajes_no_leidos: u64,
    pub estudiantes_total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeacherDashboardDto {
    pub cursos: Vec<CourseSummaryDto>,
    pub mensajes_pendientes: Vec<MessageDto>,
    pub tareas_pendientes: Vec<PendingTaskDto>,
    pub estadisticas: TeacherStatsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChildSummaryDto {
    pub id: i32,
    pub nombre: String,
    pub grado: String,
    pub curso: Option<String>,
    pub curso_id: i32,
    pub promedio: f64,
    pub total_notas: u64,
    pub asistencia_porcentaje: f64,
    pub dias_presentes: u64,
    pub total_dias: u64,
    pub observaciones_mes: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FamilyDashboardDto {
    pub hijos: Vec<ChildSummaryDto>,
    pub total_hijos: u64,
}
