use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub estudiante_id: Option<i32>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
