mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::{auth::token::TokenService, task_feed::StaticTaskFeed},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolboard=debug,info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::check_for_admin(&db, &config).await?;

    let state = AppState::new(
        db,
        TokenService::from_config(&config),
        Arc::new(StaticTaskFeed),
    );

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e)))?;

    tracing::info!("Listening on {}", config.bind_address);
    tracing::info!("API documentation at http://{}/api/docs", config.bind_address);

    axum::serve(listener, router::router(state))
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
