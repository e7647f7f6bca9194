use super::*;

/// Tests an admin passing an admin-only check.
///
/// Verifies that the guard decodes the access token, loads the user and accepts the
/// role.
///
/// Expected: Ok(User) for the admin
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = User::from_entity(factory::user::UserFactory::new(db).admin().build().await?);
    let headers = bearer(&tokens.issue_access(&admin)?);

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a family account calling a staff-only route.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_role_not_listed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (_, _, family) = factory::helpers::create_family_with_student(db).await?;
    let headers = bearer(&tokens.issue_access(&User::from_entity(family.clone()))?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Role::Admin, Role::Docente])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, family.id)
        }
        other => panic!("expected access denied, got {:?}", other),
    }

    Ok(())
}

/// Tests that an empty role list admits any authenticated user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_roles_admit_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let (_, _, family) = factory::helpers::create_family_with_student(db).await?;
    let headers = bearer(&tokens.issue_access(&User::from_entity(family))?);

    assert!(AuthGuard::new(db, &tokens, &headers).require(&[]).await.is_ok());

    Ok(())
}

/// Tests requests without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests presenting a refresh token where an access token is required.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::create_user(db).await?);
    let headers = bearer(&tokens.issue_refresh(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let ghost = User {
        id: 4040,
        name: "Fantasma".to_string(),
        email: "fantasma@test.cl".to_string(),
        role: Role::Admin,
        student_id: None,
    };
    let headers = bearer(&tokens.issue_access(&ghost)?);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4040)))
    ));

    Ok(())
}
