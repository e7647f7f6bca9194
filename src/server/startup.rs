use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParams,
    service::auth::password,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures at least one admin account exists.
///
/// When no admin is present and bootstrap credentials are configured, creates the admin
/// account. Without credentials a warning is logged, since accounts can only be registered
/// by an admin.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional bootstrap admin
///
/// # Returns
/// - `Ok(())` - An admin exists or none could be created
/// - `Err(AppError)` - Database or hashing error
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let Some(admin) = config.bootstrap_admin.clone() else {
        tracing::warn!(
            "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup"
        );
        return Ok(());
    };

    if user_repo.find_by_email(&admin.email).await?.is_some() {
        tracing::warn!(
            "Bootstrap admin email {} already belongs to a non-admin account",
            admin.email
        );
        return Ok(());
    }

    let user = user_repo
        .create(CreateUserParams {
            name: admin.name,
            email: admin.email,
            password_hash: password::hash_password(&admin.password)?,
            role: entity::user::Role::Admin,
            student_id: None,
        })
        .await?;

    tracing::info!("Created bootstrap admin account {} ({})", user.id, user.email);

    Ok(())
}
