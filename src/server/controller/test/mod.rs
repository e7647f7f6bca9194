use std::sync::Arc;

use axum::{
    body::to_bytes,
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    model::user::User,
    service::{auth::token::TokenService, task_feed::StaticTaskFeed},
    state::AppState,
};

mod auth;
mod health;

fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        TokenService::new("controller-secret", 3600, 7200),
        Arc::new(StaticTaskFeed),
    )
}

/// Headers carrying a fresh access token for `user`.
fn auth_headers(state: &AppState, user: entity::user::Model) -> HeaderMap {
    let token = state
        .tokens
        .issue_access(&User::from_entity(user))
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Turns a handler result into its status and parsed JSON body.
async fn read(result: impl IntoResponse) -> (StatusCode, Value) {
    let response: Response = result.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
