//! User service for business logic.
//!
//! Listing, lookup and editing of accounts. Registration lives in
//! [`AuthService`](crate::server::service::auth::AuthService) since it shares the
//! password hashing path with login.

use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        pagination::{Page, PageRequest},
        user::{EditUserParams, UpdateUserParams, User},
    },
    service::auth::password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves accounts with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `role` - Optional role filter
    /// - `page` - Page request
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all(&self, role: Option<Role>, page: PageRequest) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(role, page)
            .await?;

        Ok(Page::new(users, total, page))
    }

    /// Every account holding `role`, ordered by name.
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_by_role(role).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }

    /// Edits an account.
    ///
    /// Callers may edit themselves; admins may edit anyone. Only admins may change an email.
    /// A new password is hashed before it is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - Account after the update
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is neither the owner nor an admin,
    ///   or a non-admin attempted to change the email
    /// - `Err(AppError::NotFound)` - Account does not exist
    /// - `Err(AppError::Conflict)` - Email already belongs to another account
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        params: EditUserParams,
    ) -> Result<User, AppError> {
        if caller.id != id && !caller.is_admin() {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to edit user {}", id),
            )
            .into());
        }

        let user_repo = UserRepository::new(self.db);
        let current = self.get_by_id(id).await?;

        let email = match params.email {
            Some(email) if email != current.email => {
                if !caller.is_admin() {
                    return Err(AuthError::AccessDenied(
                        caller.id,
                        "non-admin attempted to change an email".to_string(),
                    )
                    .into());
                }
                if user_repo.find_by_email(&email).await?.is_some() {
                    return Err(AppError::Conflict("El email ya está registrado".to_string()));
                }
                Some(email)
            }
            _ => None,
        };

        let password_hash = params
            .password
            .as_deref()
            .map(password::hash_password)
            .transpose()?;

        user_repo
            .update(
                id,
                UpdateUserParams {
                    name: params.name,
                    email,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))
    }
}
