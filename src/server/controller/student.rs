use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::Role;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginatedDto},
        student::{CourseStudentDto, CreateStudentDto, StudentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{require_student_access, AuthGuard},
        model::{
            pagination::PageRequest,
            student::{CreateStudentParams, StudentWithCourse},
        },
        service::student::StudentService,
        state::AppState,
        util::parse::required_text,
    },
};

pub static STUDENT_TAG: &str = "student";

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StudentListQuery {
    #[serde(alias = "cursoId")]
    pub curso_id: Option<i32>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Students of a course, ordered by name, with course naming fields.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/estudiantes/por-curso/{curso_id}",
    tag = STUDENT_TAG,
    params(("curso_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course roster", body = ApiResponse<Vec<CourseStudentDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_students_by_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let students = StudentService::new(&state.db)
        .get_by_course(course_id)
        .await?;
    let dto: Vec<CourseStudentDto> = students
        .into_iter()
        .map(StudentWithCourse::into_course_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Page through students, optionally within one course.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/estudiantes",
    tag = STUDENT_TAG,
    params(StudentListQuery),
    responses(
        (status = 200, description = "Page of students", body = ApiResponse<PaginatedDto<StudentDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StudentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);
    let students = StudentService::new(&state.db)
        .get_paginated(query.curso_id, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(students.into_dto(StudentWithCourse::into_dto))),
    ))
}

/// Get one student with their course.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student
#[utoipa::path(
    get,
    path = "/api/estudiantes/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student", body = ApiResponse<StudentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_student_access(&caller, id)?;

    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(student.into_dto()))))
}

/// Enrol a student in a course.
///
/// # Access Control
/// - `admin`
#[utoipa::path(
    post,
    path = "/api/estudiantes",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = ApiResponse<StudentDto>),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = CreateStudentParams {
        name: required_text(payload.nombre, "nombre")?,
        course_id: payload
            .curso_id
            .ok_or_else(|| AppError::BadRequest("El campo curso_id es requerido".to_string()))?,
    };

    let student = StudentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(student.into_dto()).with_message("Estudiante creado correctamente")),
    ))
}
