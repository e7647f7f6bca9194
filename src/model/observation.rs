use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObservationDto {
    pub id: i32,
    pub estudiante_id: i32,
    pub docente_id: i32,
    pub fecha: NaiveDate,
    pub tipo: String,
    pub detalle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estudiante_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docente_nombre: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateObservationDto {
    #[serde(rename = "estudianteId", alias = "estudiante_id")]
    pub estudiante_id: Option<i32>,
    /// Only honoured for admins; teachers always author their own notes.
    #[serde(rename = "docenteId", alias = "docente_id")]
    pub docente_id: Option<i32>,
    pub fecha: Option<String>,
    pub tipo: Option<String>,
    pub detalle: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateObservationDto {
    pub fecha: Option<String>,
    pub tipo: Option<String>,
    pub detalle: Option<String>,
}
