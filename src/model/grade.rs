use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GradeDto {
    pub id: i32,
    pub estudiante_id: i32,
    pub asignatura: String,
    pub periodo: String,
    pub nota: f64,
    pub fecha_registro: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estudiante_nombre: Option<String>,
}

/// Batch of grade entries. Entries are kept as raw JSON so a malformed one can be skipped
/// without rejecting the whole batch.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveGradesDto {
    #[serde(default)]
    #[schema(value_type = Vec<GradeEntryDto>)]
    pub calificaciones: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GradeEntryDto {
    #[serde(rename = "estudianteId", alias = "estudiante_id")]
    pub estudiante_id: i32,
    pub asignatura: String,
    pub periodo: String,
    pub nota: f64,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateGradeDto {
    #[serde(rename = "estudianteId", alias = "estudiante_id")]
    pub estudiante_id: Option<i32>,
    pub asignatura: Option<String>,
    pub periodo: Option<String>,
    pub nota: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGradeDto {
    pub asignatura: Option<String>,
    pub periodo: Option<String>,
    pub nota: Option<f64>,
}
