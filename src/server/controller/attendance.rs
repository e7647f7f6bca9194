use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::{attendance::AttendanceStatus, user::Role};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, BatchSummaryDto, ErrorDto, PaginatedDto},
        attendance::{AttendanceDto, AttendanceStatsDto, SaveAttendanceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{student_scope, AuthGuard},
        model::{
            attendance::{AttendanceFilter, AttendanceWithStudent},
            pagination::PageRequest,
        },
        service::attendance::AttendanceService,
        state::AppState,
        util::parse::{names, parse_attendance_status, parse_date},
    },
};

pub static ATTENDANCE_TAG: &str = "attendance";

const DEFAULT_PER_PAGE: u64 = 50;

/// Course and day selector shared by the per-day listing and statistics.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CourseDayQuery {
    #[serde(rename = "cursoId", alias = "curso_id")]
    pub curso_id: Option<i32>,
    /// YYYY-MM-DD
    pub fecha: Option<String>,
}

impl CourseDayQuery {
    fn parse(self) -> Result<(i32, chrono::NaiveDate), AppError> {
        let (Some(course_id), Some(date)) = (self.curso_id, self.fecha) else {
            return Err(AppError::BadRequest(
                "Los parámetros cursoId y fecha son requeridos".to_string(),
            ));
        };

        Ok((course_id, parse_date(&date)?))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AttendanceListQuery {
    #[serde(alias = "estudianteId")]
    pub estudiante_id: Option<i32>,
    /// YYYY-MM-DD
    pub fecha: Option<String>,
    pub estado: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Attendance marks of a course on one day, ordered by student name.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/asistencia/por-fecha",
    tag = ATTENDANCE_TAG,
    params(CourseDayQuery),
    responses(
        (status = 200, description = "Marks recorded that day", body = ApiResponse<Vec<AttendanceDto>>),
        (status = 400, description = "Missing parameter or bad date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_attendance_by_date(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CourseDayQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let (course_id, date) = query.parse()?;

    let marks = AttendanceService::new(&state.db)
        .get_by_course_and_date(course_id, date)
        .await?;
    let dto: Vec<AttendanceDto> = marks
        .into_iter()
        .map(AttendanceWithStudent::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Save a batch of attendance marks.
///
/// Each entry is upserted on (student, date). Entries with a missing field, an unknown
/// status, a malformed date or an unknown student are skipped. The batch is atomic on
/// database failure.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    post,
    path = "/api/asistencia/guardar",
    tag = ATTENDANCE_TAG,
    request_body = SaveAttendanceDto,
    responses(
        (status = 200, description = "Batch saved", body = ApiResponse<BatchSummaryDto>),
        (status = 400, description = "Empty batch", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn save_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let outcome = AttendanceService::new(&state.db)
        .save_batch(payload.marcas)
        .await?;
    let message = format!(
        "Se guardaron {} registros de asistencia correctamente",
        outcome.saved()
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(outcome.into_dto()).with_message(message)),
    ))
}

/// Attendance counts by status for a course on one day.
///
/// `pendientes` is the number of enrolled students with no mark that day.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/asistencia/estadisticas",
    tag = ATTENDANCE_TAG,
    params(CourseDayQuery),
    responses(
        (status = 200, description = "Daily statistics", body = ApiResponse<AttendanceStatsDto>),
        (status = 400, description = "Missing parameter or bad date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_attendance_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CourseDayQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let (course_id, date) = query.parse()?;

    let stats = AttendanceService::new(&state.db)
        .get_stats(course_id, date)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(stats.into_dto()))))
}

/// Page through attendance marks, newest first.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student
#[utoipa::path(
    get,
    path = "/api/asistencia",
    tag = ATTENDANCE_TAG,
    params(AttendanceListQuery),
    responses(
        (status = 200, description = "Page of marks", body = ApiResponse<PaginatedDto<AttendanceDto>>),
        (status = 400, description = "Bad date or status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AttendanceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = AttendanceFilter {
        student_id: student_scope(&caller, query.estudiante_id)?,
        date: query.fecha.as_deref().map(parse_date).transpose()?,
        status: query
            .estado
            .as_deref()
            .map(parse_attendance_status)
            .transpose()?,
    };
    let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);

    let marks = AttendanceService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(marks.into_dto(AttendanceWithStudent::into_dto))),
    ))
}

/// Canonical attendance status names.
#[utoipa::path(
    get,
    path = "/api/asistencia/estados",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Status names", body = ApiResponse<Vec<String>>)
    ),
)]
pub async fn get_attendance_statuses() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(names::<AttendanceStatus>())),
    )
}
