use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::user::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{LoginDto, LoginResponseDto, RefreshDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
        util::parse::{parse_role, required_secret, required_text},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Returns an access token, a refresh token and the public user projection. Unknown
/// emails and wrong passwords produce the same 401 response.
///
/// # Returns
/// - `200 OK` - Tokens and user
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (
        payload.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::BadRequest("Email y password requeridos".to_string()));
    };

    let session = AuthService::new(&state.db, &state.tokens)
        .login(LoginParams { email, password })
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(session.into_dto()))))
}

/// Exchange a refresh token for a new access token.
///
/// # Returns
/// - `200 OK` - New access token
/// - `400 Bad Request` - Refresh token missing
/// - `401 Unauthorized` - Refresh token invalid, expired, or its user no longer exists
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "New access token", body = ApiResponse<TokenDto>),
        (status = 400, description = "Refresh token missing", body = ErrorDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let refresh_token = required_text(payload.refresh_token, "refresh_token")?;

    let token = AuthService::new(&state.db, &state.tokens)
        .refresh(&refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(TokenDto { token }))))
}

/// Current user's public profile.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller profile", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Register a new account.
///
/// # Access Control
/// - `admin`
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field, invalid role, or student link on a non-family role
/// - `404 Not Found` - Linked student does not exist
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Linked student not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = RegisterParams {
        name: required_text(payload.nombre, "nombre")?,
        email: required_text(payload.email, "email")?,
        password: required_secret(payload.password, "password")?,
        role: parse_role(&required_text(payload.rol, "rol")?)?,
        student_id: payload.estudiante_id,
    };

    let user = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user.into_dto()).with_message("Usuario registrado correctamente")),
    ))
}
