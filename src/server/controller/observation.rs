use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use entity::{observation::ObservationType, user::Role};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, PaginatedDto},
        observation::{CreateObservationDto, ObservationDto, UpdateObservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{student_scope, AuthGuard},
        model::{
            observation::{
                AddObservationParams, ObservationFilter, ObservationWithNames,
                UpdateObservationParams,
            },
            pagination::PageRequest,
        },
        service::observation::ObservationService,
        state::AppState,
        util::parse::{names, optional_text, parse_date, parse_observation_type, required_text},
    },
};

pub static OBSERVATION_TAG: &str = "observation";

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ObservationListQuery {
    #[serde(alias = "estudianteId")]
    pub estudiante_id: Option<i32>,
    pub tipo: Option<String>,
    /// Inclusive lower bound, YYYY-MM-DD
    pub fecha_inicio: Option<String>,
    /// Inclusive upper bound, YYYY-MM-DD
    pub fecha_fin: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Observations about students of a course, newest first, with student and author names.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/observaciones/por-curso/{curso_id}",
    tag = OBSERVATION_TAG,
    params(("curso_id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Observations", body = ApiResponse<Vec<ObservationDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_observations_by_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let observations = ObservationService::new(&state.db)
        .get_by_course(course_id)
        .await?;
    let dto: Vec<ObservationDto> = observations
        .into_iter()
        .map(ObservationWithNames::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Record an observation about a student.
///
/// The caller is the author; an admin may name another author with `docenteId`. The date
/// defaults to today.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    post,
    path = "/api/observaciones/agregar",
    tag = OBSERVATION_TAG,
    request_body = CreateObservationDto,
    responses(
        (status = 201, description = "Observation recorded", body = ApiResponse<ObservationDto>),
        (status = 400, description = "Missing field, bad type or bad date", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed or foreign author", body = ErrorDto),
        (status = 404, description = "Student or author not found", body = ErrorDto)
    ),
)]
pub async fn add_observation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateObservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let date = match optional_text(payload.fecha, "fecha")? {
        Some(date) => parse_date(&date)?,
        None => Utc::now().date_naive(),
    };

    let params = AddObservationParams {
        student_id: payload
            .estudiante_id
            .ok_or_else(|| AppError::BadRequest("El campo estudianteId es requerido".to_string()))?,
        teacher_id: payload.docente_id,
        date,
        kind: parse_observation_type(&required_text(payload.tipo, "tipo")?)?,
        detail: required_text(payload.detalle, "detalle")?,
    };

    let observation = ObservationService::new(&state.db)
        .create(&caller, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(observation.into_dto())
                .with_message("Observación registrada correctamente"),
        ),
    ))
}

/// Page through observations, newest first.
///
/// # Access Control
/// - `admin`, `docente`
/// - `familia` - only the linked student
#[utoipa::path(
    get,
    path = "/api/observaciones",
    tag = OBSERVATION_TAG,
    params(ObservationListQuery),
    responses(
        (status = 200, description = "Page of observations", body = ApiResponse<PaginatedDto<ObservationDto>>),
        (status = 400, description = "Bad type or date range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the linked student", body = ErrorDto)
    ),
)]
pub async fn get_observations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ObservationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = ObservationFilter {
        student_id: student_scope(&caller, query.estudiante_id)?,
        kind: query
            .tipo
            .as_deref()
            .map(parse_observation_type)
            .transpose()?,
        from: query.fecha_inicio.as_deref().map(parse_date).transpose()?,
        to: query.fecha_fin.as_deref().map(parse_date).transpose()?,
    };
    let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);

    let observations = ObservationService::new(&state.db)
        .get_paginated(filter, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            observations.into_dto(ObservationWithNames::into_dto),
        )),
    ))
}

/// Edit an observation.
///
/// # Access Control
/// - The author, or `admin`
#[utoipa::path(
    put,
    path = "/api/observaciones/{id}",
    tag = OBSERVATION_TAG,
    params(("id" = i32, Path, description = "Observation ID")),
    request_body = UpdateObservationDto,
    responses(
        (status = 200, description = "Observation updated", body = ApiResponse<ObservationDto>),
        (status = 400, description = "Bad type, date or blank detail", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Observation not found", body = ErrorDto)
    ),
)]
pub async fn update_observation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateObservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let params = UpdateObservationParams {
        date: payload.fecha.as_deref().map(parse_date).transpose()?,
        kind: payload
            .tipo
            .as_deref()
            .map(parse_observation_type)
            .transpose()?,
        detail: optional_text(payload.detalle, "detalle")?,
    };

    let observation = ObservationService::new(&state.db)
        .update(&caller, id, params)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(observation.into_dto()))))
}

/// Observation type names.
#[utoipa::path(
    get,
    path = "/api/observaciones/tipos",
    tag = OBSERVATION_TAG,
    responses(
        (status = 200, description = "Type names", body = ApiResponse<Vec<String>>)
    ),
)]
pub async fn get_observation_types() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(names::<ObservationType>())),
    )
}
