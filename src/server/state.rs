//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds:
//! - Database connection pool
//! - Token service for issuing and validating bearer tokens
//! - Pending-task feed used by the teacher dashboard

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{auth::token::TokenService, task_feed::TaskFeed};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, `TokenService`
/// keeps its keys behind an `Arc`, and the task feed is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by every request.
    pub db: DatabaseConnection,

    /// Signs and validates access and refresh tokens.
    pub tokens: TokenService,

    /// Source of pending tasks shown on the teacher dashboard.
    pub task_feed: Arc<dyn TaskFeed>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret and lifetimes
    /// - `task_feed` - Pending task provider for teacher dashboards
    pub fn new(db: DatabaseConnection, tokens: TokenService, task_feed: Arc<dyn TaskFeed>) -> Self {
        Self {
            db,
            tokens,
            task_feed,
        }
    }
}
