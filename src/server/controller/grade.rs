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
        api::{ApiResponse, BatchSummaryDto, ErrorDto, PaginatedDto},
        grade::{CreateGradeDto, GradeDto, SaveGradesDto, UpdateGradeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{student_scope, AuthGuard},
        model::{
            grade::{GradeEntry, GradeFilter, GradeWithStudent, UpdateGradeParams},
            pagination::PageRequest,
        },
        service::grade::GradeService,
        state::AppState,
        util::parse::{optional_text, required_text},
    },
};

pub static GRADE_TAG: &str = "grade";

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GradeSearchQuery {
    #[serde(rename = "cursoId", alias = "curso_id")]
    pub curso_id: Option<i32>,
    pub asignatura: Option<String>,
    pub periodo: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GradeListQuery {
    #[serde(alias = "estudianteId")]
    pub estudiante_id: Option<i32>,
    pub asignatura: Option<String>,
    pub periodo: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Grades of a course, optionally narrowed to a subject and period.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/calificaciones/buscar",
    tag = GRADE_TAG,
    params(GradeSearchQuery),
    responses(
        (status = 200, description = "Matching grades ordered by student name", body = ApiResponse<Vec<GradeDto>>),
        (status = 400, description = "cursoId missing", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn search_grades(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<GradeSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let course_id = query
        .curso_id
        .ok_or_else(|| AppError::BadRequest("El parámetro cursoId es requerido".to_string()))?;
    let subject = optional_text(query.asignatura, "asignatura")?;
    let period = optional_text(query.periodo, "periodo")?;

    let grades = GradeService::new(&state.db)
        .search_by_course(course_id, subject.as_deref(), period.as_deref())
        .await?;
    let dto: Vec<GradeDto> = grades.into_iter().map(GradeWithStudent::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Save a batch of grades.
///
/// Each entry is upserted on (student, subject, period). Malformed entries, scores outside
/// 0.0 to 5.0 and unknown students are skipped; the response reports how many entries were
/// created, updated and skipped. The batch is atomic on database failure.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    post,
    path = "/api/calificaciones/guardar",
    tag = GRADE_TAG,
    request_body = SaveGradesDto,
    responses(
        (status = 200, description = "Batch saved", body = ApiResponse<BatchSummaryDto>),
        (status = 400, description = "Empty batch", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn save_grades(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveGradesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let outcome = GradeService::new(&state.db)
        .save_batch(payload.calificaciones)
        .await?;
    let message = format!(
        "Se guardaron {} calificaciones correctamente",
        outcome.saved()
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(outcome.into_dto()).with_message(message)),
    ))
}

/// Page through grades, newest first.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student; defaults to it when no student is given
#[utoipa::path(
    get,
    path = "/api/calificaciones",
    tag = GRADE_TAG,
    params(GradeListQuery),
    responses(
        (status = 200, description = "Page of grades", body = ApiResponse<PaginatedDto<GradeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto)
    ),
)]
pub async fn get_grades(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<GradeListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = GradeFilter {
        student_id: student_scope(&caller, query.estudiante_id)?,
        subject: optional_text(query.asignatura, "asignatura")?,
        period: optional_text(query.periodo, "periodo")?,
    };
    let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);

    let grades = GradeService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(grades.into_dto(GradeWithStudent::into_dto))),
    ))
}

/// Record a single grade.
///
/// # Access Control
/// - `admin`, `docente`
///
/// # Returns
/// - `201 Created` - Grade recorded
/// - `400 Bad Request` - Missing field or score outside 0.0 to 5.0
/// - `404 Not Found` - Student not found
/// - `409 Conflict` - Grade already exists for the student, subject and period
#[utoipa::path(
    post,
    path = "/api/calificaciones",
    tag = GRADE_TAG,
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = ApiResponse<GradeDto>),
        (status = 400, description = "Invalid grade", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Grade already exists", body = ErrorDto)
    ),
)]
pub async fn create_grade(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let entry = GradeEntry {
        student_id: payload
            .estudiante_id
            .ok_or_else(|| AppError::BadRequest("El campo estudianteId es requerido".to_string()))?,
        subject: required_text(payload.asignatura, "asignatura")?,
        period: required_text(payload.periodo, "periodo")?,
        score: payload
            .nota
            .ok_or_else(|| AppError::BadRequest("El campo nota es requerido".to_string()))?,
    };

    let grade = GradeService::new(&state.db).create(entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(grade.into_dto()).with_message("Calificación registrada correctamente")),
    ))
}

/// Partially update a grade. The recorded timestamp is refreshed.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    put,
    path = "/api/calificaciones/{id}",
    tag = GRADE_TAG,
    params(("id" = i32, Path, description = "Grade ID")),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated", body = ApiResponse<GradeDto>),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 409, description = "Another grade already uses that subject and period", body = ErrorDto)
    ),
)]
pub async fn update_grade(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let params = UpdateGradeParams {
        subject: optional_text(payload.asignatura, "asignatura")?,
        period: optional_text(payload.periodo, "periodo")?,
        score: payload.nota,
    };

    let grade = GradeService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(grade.into_dto()))))
}

/// Distinct grading periods, sorted.
#[utoipa::path(
    get,
    path = "/api/calificaciones/periodos",
    tag = GRADE_TAG,
    responses(
        (status = 200, description = "Periods", body = ApiResponse<Vec<String>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_periods(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let periods = GradeService::new(&state.db).get_periods().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(periods))))
}

/// Distinct subjects, sorted.
#[utoipa::path(
    get,
    path = "/api/calificaciones/asignaturas",
    tag = GRADE_TAG,
    responses(
        (status = 200, description = "Subjects", body = ApiResponse<Vec<String>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let subjects = GradeService::new(&state.db).get_subjects().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(subjects))))
}
