use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod grade;
mod message;

const TEST_SECRET: &str = "test-secret";

fn as_user(model: entity::user::Model) -> User {
    User::from_entity(model)
}
