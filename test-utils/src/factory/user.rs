//! User factory for creating test accounts.

use crate::factory::helpers::next_id;
use entity::user::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The stored password defaults to a placeholder that is not a valid hash; tests that log in
/// must supply a real hash through `password_hash`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Ana Torres")
///     .email("ana@colegio.cl")
///     .admin()
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    role: Role,
    student_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Usuario {id}"`
    /// - email: `"usuario{id}@test.cl"`
    /// - role: `docente`
    /// - student_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Usuario {}", id),
            email: format!("usuario{}@test.cl", id),
            password_hash: "unset".to_string(),
            role: Role::Docente,
            student_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Shorthand for `role(Role::Admin)`.
    pub fn admin(self) -> Self {
        self.role(Role::Admin)
    }

    /// Shorthand for `role(Role::Docente)`.
    pub fn docente(self) -> Self {
        self.role(Role::Docente)
    }

    /// Makes the user a `familia` account linked to the given student.
    pub fn familia(mut self, student_id: i32) -> Self {
        self.role = Role::Familia;
        self.student_id = Some(student_id);
        self
    }

    /// Makes the user a `familia` account without a linked student.
    pub fn unlinked_familia(mut self) -> Self {
        self.role = Role::Familia;
        self.student_id = None;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            student_id: ActiveValue::Set(self.student_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `docente` user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
