use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use entity::user::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        attendance::AttendanceDto,
        dashboard::{FamilyDashboardDto, TeacherDashboardDto},
        grade::GradeDto,
        observation::ObservationDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{require_student_access, AuthGuard},
        model::{attendance::AttendanceRecord, grade::Grade, observation::ObservationWithNames},
        service::{
            attendance::AttendanceService, dashboard::DashboardService, grade::GradeService,
            observation::ObservationService,
        },
        state::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Teacher dashboard: first courses of the roster, newest unread messages, pending tasks and
/// school-wide totals.
///
/// # Access Control
/// - `docente` - own dashboard only
/// - `admin` - any teacher
#[utoipa::path(
    get,
    path = "/api/docente/dashboard/{docente_id}",
    tag = DASHBOARD_TAG,
    params(("docente_id" = i32, Path, description = "Teacher user ID")),
    responses(
        (status = 200, description = "Dashboard", body = ApiResponse<TeacherDashboardDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this teacher or an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto)
    ),
)]
pub async fn get_teacher_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;
    require_self_or_admin(caller.id, caller.is_admin(), teacher_id)?;

    let dashboard = DashboardService::new(&state.db)
        .teacher(teacher_id, state.task_feed.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(dashboard.into_dto()))))
}

/// Family dashboard: grade average, current-month attendance and recent observations of
/// the linked student.
///
/// # Access Control
/// - `familia` - own dashboard only
/// - `admin` - any family
#[utoipa::path(
    get,
    path = "/api/familia/dashboard/{familia_id}",
    tag = DASHBOARD_TAG,
    params(("familia_id" = i32, Path, description = "Family user ID")),
    responses(
        (status = 200, description = "Dashboard", body = ApiResponse<FamilyDashboardDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this family or an admin", body = ErrorDto),
        (status = 404, description = "Family not found", body = ErrorDto)
    ),
)]
pub async fn get_family_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(family_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Familia])
        .await?;
    require_self_or_admin(caller.id, caller.is_admin(), family_id)?;

    let dashboard = DashboardService::new(&state.db)
        .family(family_id, Utc::now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(dashboard.into_dto()))))
}

/// All grades of a child, newest first.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student
#[utoipa::path(
    get,
    path = "/api/familia/hijo-calificaciones/{estudiante_id}",
    tag = DASHBOARD_TAG,
    params(("estudiante_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Grades", body = ApiResponse<Vec<GradeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_child_grades(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_student_access(&caller, student_id)?;

    let grades = GradeService::new(&state.db)
        .get_by_student(student_id)
        .await?;
    let dto: Vec<GradeDto> = grades.into_iter().map(Grade::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Full attendance history of a child, newest first.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student
#[utoipa::path(
    get,
    path = "/api/familia/hijo-asistencia/{estudiante_id}",
    tag = DASHBOARD_TAG,
    params(("estudiante_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Attendance marks", body = ApiResponse<Vec<AttendanceDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_child_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_student_access(&caller, student_id)?;

    let marks = AttendanceService::new(&state.db)
        .get_by_student(student_id)
        .await?;
    let dto: Vec<AttendanceDto> = marks.into_iter().map(AttendanceRecord::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Observations about a child, newest first, with author names.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student
#[utoipa::path(
    get,
    path = "/api/familia/hijo-observaciones/{estudiante_id}",
    tag = DASHBOARD_TAG,
    params(("estudiante_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Observations", body = ApiResponse<Vec<ObservationDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_child_observations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_student_access(&caller, student_id)?;

    let observations = ObservationService::new(&state.db)
        .get_by_student(student_id)
        .await?;
    let dto: Vec<ObservationDto> = observations
        .into_iter()
        .map(ObservationWithNames::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

fn require_self_or_admin(caller_id: i32, is_admin: bool, target_id: i32) -> Result<(), AppError> {
    if caller_id == target_id || is_admin {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        caller_id,
        format!("attempted to open the dashboard of user {}", target_id),
    )
    .into())
}
