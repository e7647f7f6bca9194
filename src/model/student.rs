use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::course::CourseDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub nombre: String,
    pub curso_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curso: Option<CourseDto>,
}

/// Student row of a course roster, flattened with the course labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseStudentDto {
    pub id: i32,
    pub nombre: String,
    pub curso_id: i32,
    pub curso_nombre: String,
    pub nivel: String,
    pub letra: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub nombre: Option<String>,
    #[serde(alias = "cursoId")]
    pub curso_id: Option<i32>,
}
