//! Users Service - CRUD routing for the Users resource.
//!
//! Composes the layers explicitly: model, then actions over the model,
//! then routes over the actions, then the application router.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

mod actions;
mod api;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::actions::UserActions;
use crate::api::build_router;
use crate::config::{Config, LoggingConfig};
use crate::storage::SqliteUserModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        // Missing .env is expected in production
        eprintln!("Note: No .env file loaded ({e})");
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init(&LoggingConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(anyhow::anyhow!("Configuration error: {}", e));
        }
    };

    logging::init(&config.logging);

    tracing::info!("Starting Users Service v{}", env!("CARGO_PKG_VERSION"));

    let base_path = config.api.normalized_base_path();

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        base_path = %base_path,
        "Configuration loaded"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            anyhow::anyhow!("Database connection error: {}", e)
        })?;

    let model = SqliteUserModel::new(pool);
    model.init_schema().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize database schema");
        anyhow::anyhow!("Schema initialization error: {}", e)
    })?;

    tracing::info!("Database connected and schema initialized");

    let actions = UserActions::new(Arc::new(model));
    let app = build_router(actions, &base_path);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
