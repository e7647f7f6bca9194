//! Bearer-token authorization guard.
//!
//! Every protected handler builds an [`AuthGuard`] from the request headers and calls
//! [`AuthGuard::require`] with the roles allowed on that route. Student-scoped reads then
//! pass the resolved user through [`require_student_access`] or [`student_scope`] so a
//! `familia` account only ever sees its linked student.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::{TokenKind, TokenService},
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the caller and checks their role.
    ///
    /// An empty `roles` slice admits any authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Caller, freshly loaded from the database
    /// - `Err(AuthError::MissingToken)` - No bearer token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or a refresh token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - Role not in `roles`
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.decode(token, TokenKind::Access)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("role {:?} not in {:?}", user.role, roles),
            )
            .into());
        }

        Ok(user)
    }
}

/// Refuses a `familia` caller access to any student other than its linked one.
pub fn require_student_access(user: &User, student_id: i32) -> Result<(), AppError> {
    if user.role == Role::Familia && user.student_id != Some(student_id) {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("family account requested student {}", student_id),
        )
        .into());
    }

    Ok(())
}

/// Resolves the student filter of a listing.
///
/// Staff get the requested filter unchanged. A `familia` caller is pinned to its linked
/// student: no filter means that student, any other student is refused.
pub fn student_scope(user: &User, requested: Option<i32>) -> Result<Option<i32>, AppError> {
    if user.role != Role::Familia {
        return Ok(requested);
    }

    match (requested, user.student_id) {
        (Some(requested), _) => {
            require_student_access(user, requested)?;
            Ok(Some(requested))
        }
        (None, Some(linked)) => Ok(Some(linked)),
        (None, None) => Err(AuthError::AccessDenied(
            user.id,
            "family account without a linked student".to_string(),
        )
        .into()),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
