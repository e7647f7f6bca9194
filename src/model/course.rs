use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::StudentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub nombre: String,
    pub nivel: String,
    pub letra: String,
}

/// Course row of the roster listing, with its enrolled student count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseSummaryDto {
    pub id: i32,
    pub nombre: String,
    pub nivel: String,
    pub letra: String,
    pub total_estudiantes: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseDetailDto {
    pub curso: CourseDto,
    pub estudiantes: Vec<StudentDto>,
    pub total_estudiantes: u64,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseDto {
    pub nombre: Option<String>,
    pub nivel: Option<String>,
    pub letra: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseDto {
    pub nombre: Option<String>,
    pub nivel: Option<String>,
    pub letra: Option<String>,
}
