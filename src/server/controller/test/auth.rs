use super::*;
use crate::{
    model::auth::LoginDto,
    server::{
        controller::auth::{login, profile},
        service::auth::password,
    },
};
use axum::{extract::State, Json};
use test_utils::{builder::TestBuilder, factory};

/// Tests logging in without a password.
///
/// Expected: 400 with the failure envelope
#[tokio::test]
async fn login_requires_both_fields() {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = read(
        login(
            State(state(db)),
            Json(LoginDto {
                email: Some("ana@colegio.cl".to_string()),
                password: None,
            }),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email y password requeridos");
}

/// Tests the login then profile round trip.
///
/// Verifies that the token returned by login authenticates the profile endpoint and
/// that the password hash never appears in either payload.
///
/// Expected: 200 twice, same user ID
#[tokio::test]
async fn login_token_opens_profile() {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::user::UserFactory::new(db)
        .email("ana@colegio.cl")
        .password_hash(password::hash_password("secreto").unwrap())
        .build()
        .await
        .unwrap();

    let (status, body) = read(
        login(
            State(state.clone()),
            Json(LoginDto {
                email: Some("  ana@colegio.cl ".to_string()),
                password: Some("secreto".to_string()),
            }),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["user"].get("password_hash").is_none());

    let token = body["data"]["token"].as_str().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let (status, body) = read(profile(State(state), headers).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user.id);
}

/// Tests a wrong password.
///
/// Expected: 401 with a generic message
#[tokio::test]
async fn login_wrong_password_is_unauthorized() {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ana@colegio.cl")
        .password_hash(password::hash_password("secreto").unwrap())
        .build()
        .await
        .unwrap();

    let (status, body) = read(
        login(
            State(state(db)),
            Json(LoginDto {
                email: Some("ana@colegio.cl".to_string()),
                password: Some("incorrecta".to_string()),
            }),
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Credenciales inválidas");
}
