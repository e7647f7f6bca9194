//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. Every
//! endpoint answers with the `{success, data, message}` JSON envelope defined in
//! [`crate::model::api`].
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and validation
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication and role guards
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service, task feed)
//! - **Startup** (`startup`) - Database connection, migrations and admin bootstrap
//! - **Router** (`router`) - Route table, OpenAPI document and Swagger UI
//! - **Util** (`util`) - Parsing helpers for dates, enums and request fields
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** authenticates through `AuthGuard`, converts the DTO to params
//! 3. **Service** applies business rules and opens transactions where needed
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the result to a DTO and wraps it in the envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
