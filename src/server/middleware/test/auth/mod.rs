use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{require_student_access, student_scope, AuthGuard},
    model::user::User,
    service::auth::token::TokenService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::user::Role;
use test_utils::{builder::TestBuilder, factory};

mod require;
mod student_access;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", 3600, 7200)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
