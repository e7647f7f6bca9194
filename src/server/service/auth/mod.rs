//! Credential login, token refresh and account registration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{student::StudentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginParams, RegisterParams, Session},
        user::{CreateUserParams, User},
    },
};

pub mod password;
pub mod token;

use token::{TokenKind, TokenService};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues an access and a refresh token.
    ///
    /// Unknown email and wrong password fail identically so a caller cannot probe which
    /// accounts exist.
    ///
    /// # Returns
    /// - `Ok(Session)` - Tokens plus the public user projection
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database or signing error
    pub async fn login(&self, params: LoginParams) -> Result<Session, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials(params.email).into());
        };

        if !password::verify_password(&params.password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials(params.email).into());
        }

        let user = credentials.user;
        let token = self.tokens.issue_access(&user)?;
        let refresh_token = self.tokens.issue_refresh(&user)?;

        tracing::info!("User {} logged in", user.id);

        Ok(Session {
            user,
            token,
            refresh_token,
        })
    }

    /// Issues a new access token from a refresh token.
    ///
    /// The new token carries the role currently stored for the user, not the one embedded
    /// in the refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.tokens.decode(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        self.tokens.issue_access(&user)
    }

    /// Creates an account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest)` - Student link on a role other than `familia`
    /// - `Err(AppError::NotFound)` - Linked student does not exist
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(student_id) = params.student_id {
            if params.role != entity::user::Role::Familia {
                return Err(AppError::BadRequest(
                    "Solo las cuentas familia pueden vincular un estudiante".to_string(),
                ));
            }

            if StudentRepository::new(self.db)
                .find_by_id(student_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Estudiante no encontrado".to_string()));
            }
        }

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash: password::hash_password(&params.password)?,
                role: params.role,
                student_id: params.student_id,
            })
            .await?;

        tracing::info!("Registered user {} with role {:?}", user.id, user.role);

        Ok(user)
    }
}
