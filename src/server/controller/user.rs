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
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::{pagination::PageRequest, user::{EditUserParams, User}},
        service::user::UserService,
        state::AppState,
        util::parse::{optional_text, parse_role},
    },
};

pub static USER_TAG: &str = "user";

const DEFAULT_PER_PAGE: u64 = 20;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UserListQuery {
    /// Restrict to one role: docente, familia or admin
    pub rol: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// List accounts, ordered by name.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of accounts", body = ApiResponse<PaginatedDto<UserDto>>),
        (status = 400, description = "Invalid role filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let role = query.rol.as_deref().map(parse_role).transpose()?;
    let page = PageRequest::new(query.page, query.per_page, DEFAULT_PER_PAGE);

    let users = UserService::new(&state.db).get_all(role, page).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(users.into_dto(User::into_dto)))))
}

/// List every family account, ordered by name.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/usuarios/familia",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Family accounts", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_families(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_role(&state, &headers, Role::Familia).await
}

/// List every teacher account, ordered by name.
///
/// # Access Control
/// - `admin`, `docente`
#[utoipa::path(
    get,
    path = "/api/usuarios/docentes",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Teacher accounts", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_role(&state, &headers, Role::Docente).await
}

/// Get one account.
///
/// # Access Control
/// - `admin`, `docente` - any account
/// - `familia` - only itself
#[utoipa::path(
    get,
    path = "/api/usuario/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view this account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    if caller.role == Role::Familia && caller.id != id {
        return Err(AuthError::AccessDenied(caller.id, format!("attempted to view user {}", id)).into());
    }

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Edit an account.
///
/// # Access Control
/// - The account itself or `admin`; only `admin` may change an email
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - A field is present but blank
/// - `403 Forbidden` - Not allowed to edit this account or its email
/// - `404 Not Found` - User not found
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated account", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    if payload.password.as_deref() == Some("") {
        return Err(AppError::BadRequest("El campo password es requerido".to_string()));
    }

    let params = EditUserParams {
        name: optional_text(payload.nombre, "nombre")?,
        email: optional_text(payload.email, "email")?,
        password: payload.password,
    };

    let user = UserService::new(&state.db).update(&caller, id, params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(user.into_dto()).with_message("Usuario actualizado correctamente")),
    ))
}

async fn list_role(
    state: &AppState,
    headers: &HeaderMap,
    role: Role,
) -> Result<(StatusCode, Json<ApiResponse<Vec<UserDto>>>), AppError> {
    AuthGuard::new(&state.db, &state.tokens, headers)
        .require(&[Role::Admin, Role::Docente])
        .await?;

    let users = UserService::new(&state.db).get_by_role(role).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(users.into_iter().map(User::into_dto).collect())),
    ))
}
