use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        course::{CourseDetailDto, CourseDto, CourseSummaryDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::course::{CourseSummary, CreateCourseParams, UpdateCourseParams},
        service::course::CourseService,
        state::AppState,
        util::parse::{optional_text, required_text},
    },
};

pub static COURSE_TAG: &str = "course";

/// List courses with their student counts.
///
/// Courses without students are included with a count of zero. Ordered by level, then
/// section letter.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/cursos",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Courses with student counts", body = ApiResponse<Vec<CourseSummaryDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let courses = CourseService::new(&state.db).get_summaries().await?;
    let dto: Vec<CourseSummaryDto> = courses.into_iter().map(CourseSummary::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Get a course with its students.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/cursos/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course and roster", body = ApiResponse<CourseDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let detail = CourseService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(detail.into_dto()))))
}

/// Create a course.
///
/// # Access Control
/// - `admin`
#[utoipa::path(
    post,
    path = "/api/cursos",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseDto>),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = CreateCourseParams {
        name: required_text(payload.nombre, "nombre")?,
        level: required_text(payload.nivel, "nivel")?,
        section: required_text(payload.letra, "letra")?,
    };

    let course = CourseService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(course.into_dto()).with_message("Curso creado correctamente")),
    ))
}

/// Partially update a course.
///
/// # Access Control
/// - `admin`
#[utoipa::path(
    put,
    path = "/api/cursos/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseDto>),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = UpdateCourseParams {
        name: optional_text(payload.nombre, "nombre")?,
        level: optional_text(payload.nivel, "nivel")?,
        section: optional_text(payload.letra, "letra")?,
    };

    let course = CourseService::new(&state.db).update(id, params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(course.into_dto()).with_message("Curso actualizado correctamente")),
    ))
}

/// Delete a course with no enrolled students.
///
/// # Access Control
/// - `admin`
///
/// # Returns
/// - `200 OK` - Course deleted
/// - `404 Not Found` - Course not found
/// - `409 Conflict` - Course still has students
#[utoipa::path(
    delete,
    path = "/api/cursos/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Course still has students", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    CourseService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Curso eliminado correctamente")),
    ))
}
