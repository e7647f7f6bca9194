use super::*;
use crate::server::{
    model::auth::{LoginParams, RegisterParams},
    service::auth::{
        password,
        token::{TokenKind, TokenService},
        AuthService,
    },
};
use entity::user::Role;
use sea_orm::EntityTrait;

fn tokens() -> TokenService {
    TokenService::new(TEST_SECRET, 3600, 7200)
}

/// Tests logging in with a correct password.
///
/// Verifies that the session carries the public user and an access token whose claims
/// hold the user's ID and role.
///
/// Expected: Ok(Session)
#[tokio::test]
async fn login_issues_tokens_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db)
        .email("ana@colegio.cl")
        .password_hash(password::hash_password("secreto")?)
        .build()
        .await?;

    let session = AuthService::new(db, &tokens)
        .login(LoginParams {
            email: "ana@colegio.cl".to_string(),
            password: "secreto".to_string(),
        })
        .await?;

    assert_eq!(session.user.id, user.id);
    let claims = tokens.decode(&session.token, TokenKind::Access)?;
    assert_eq!(claims.user_id()?, user.id);
    assert_eq!(claims.rol, "docente");
    assert!(tokens.decode(&session.refresh_token, TokenKind::Refresh).is_ok());

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .email("ana@colegio.cl")
        .password_hash(password::hash_password("secreto")?)
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);
    for (email, pass) in [("ana@colegio.cl", "otra"), ("nadie@colegio.cl", "secreto")] {
        let result = service
            .login(LoginParams {
                email: email.to_string(),
                password: pass.to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
        ));
    }

    Ok(())
}

/// Tests that a stored plaintext password never authenticates.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn login_rejects_plaintext_stored_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .email("legacy@colegio.cl")
        .password_hash("secreto")
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(LoginParams {
            email: "legacy@colegio.cl".to_string(),
            password: "secreto".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests exchanging a refresh token for an access token.
///
/// Verifies that the new access token keeps the user's ID and role and that an access
/// token is not accepted in place of a refresh token.
///
/// Expected: Ok(token) for the refresh token, Err for the access token
#[tokio::test]
async fn refresh_keeps_identity_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = as_user(factory::user::UserFactory::new(db).admin().build().await?);
    let refresh_token = tokens.issue_refresh(&admin)?;

    let service = AuthService::new(db, &tokens);
    let access = service.refresh(&refresh_token).await?;

    let claims = tokens.decode(&access, TokenKind::Access)?;
    assert_eq!(claims.user_id()?, admin.id);
    assert_eq!(claims.rol, "admin");

    let access_as_refresh = service.refresh(&access).await;
    assert!(matches!(
        access_as_refresh,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests registering an account.
///
/// Verifies that the stored password is a salted hash, never the plaintext.
///
/// Expected: Ok(User) and a verifiable non-plaintext hash
#[tokio::test]
async fn register_stores_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = AuthService::new(db, &tokens)
        .register(RegisterParams {
            name: "Luis".to_string(),
            email: "luis@colegio.cl".to_string(),
            password: "clave123".to_string(),
            role: Role::Docente,
            student_id: None,
        })
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "clave123");
    assert!(password::verify_password("clave123", &stored.password_hash));

    Ok(())
}

/// Tests registering an email that already exists.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .email("luis@colegio.cl")
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .register(RegisterParams {
            name: "Luis".to_string(),
            email: "luis@colegio.cl".to_string(),
            password: "clave123".to_string(),
            role: Role::Docente,
            student_id: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests linking a student to a non-family account.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn register_rejects_student_link_on_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (_, student) = factory::helpers::create_student_with_course(db).await?;

    let result = AuthService::new(db, &tokens)
        .register(RegisterParams {
            name: "Luis".to_string(),
            email: "luis@colegio.cl".to_string(),
            password: "clave123".to_string(),
            role: Role::Docente,
            student_id: Some(student.id),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
