use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::{ApiResponse, HealthDto};

pub static HEALTH_TAG: &str = "health";

/// Liveness probe. Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(HealthDto {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        })),
    )
}
