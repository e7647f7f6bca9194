use entity::user::Role;

use crate::{model::auth::LoginResponseDto, server::model::user::User};

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// Tokens issued at login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            token: self.token,
            refresh_token: self.refresh_token,
            user: self.user.into_dto(),
        }
    }
}

/// Account registration with the password still in plaintext.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub student_id: Option<i32>,
}
