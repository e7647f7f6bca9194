use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the `Authorization` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or kind validation.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so responses never reveal which part was wrong.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// Token references a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role or ownership the operation requires.
    ///
    /// Carries the user ID and a detailed reason for server-side logs.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level; clients only receive a generic message.
///
/// # Returns
/// - 401 Unauthorized - Missing/invalid token, bad credentials, deleted user
/// - 403 Forbidden - Role or ownership check failed
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Token requerido"),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Token inválido o expirado")
            }
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Credenciales inválidas"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Acceso denegado"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
