//! Account domain models and parameters.

use entity::user::Role;
use sea_orm::ActiveEnum;

use crate::model::user::UserDto;

/// Account without its credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Linked student, only set for `familia` accounts.
    pub student_id: Option<i32>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            student_id: entity.student_id,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            nombre: self.name,
            email: self.email,
            rol: self.role.to_value(),
            estudiante_id: self.student_id,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Account together with its stored password hash, used only during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub student_id: Option<i32>,
}

/// Partial account update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Account update as submitted by a caller, password still in plaintext.
#[derive(Debug, Clone, Default)]
pub struct EditUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
