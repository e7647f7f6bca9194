use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    #[serde(rename = "estudianteId")]
    pub estudiante_id: i32,
    pub fecha: NaiveDate,
    pub estado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estudiante_nombre: Option<String>,
}

/// Batch of attendance marks, kept as raw JSON so malformed entries can be skipped.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveAttendanceDto {
    #[serde(default, alias = "asistencias")]
    #[schema(value_type = Vec<AttendanceEntryDto>)]
    pub marcas: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEntryDto {
    #[serde(rename = "estudianteId", alias = "estudiante_id")]
    pub estudiante_id: i32,
    pub fecha: String,
    pub estado: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceStatsDto {
    pub total_estudiantes: u64,
    pub por_estado: BTreeMap<String, u64>,
    pub registrados: u64,
    pub pendientes: u64,
}
