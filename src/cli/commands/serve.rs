use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::auth::JwtKeys;
use crate::config;
use crate::database::{DatabaseManager, Repositories};
use crate::routes;
use crate::state::AppState;

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let config = config::config();
    info!("Starting Golf League API in {:?} mode", config.environment);
    if crate::is_development!() {
        info!("Development mode: permissive CORS and the local signing key are in effect");
    }

    let keys = JwtKeys::from_config(&config.security).context("JWT_SECRET must be set")?;
    let database = DatabaseManager::connect(&config.database)
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        database.migrate().await.context("Failed to apply migrations")?;
    }

    let state = AppState::new(
        Repositories::postgres(database.pool()),
        Arc::new(database.clone()),
        keys,
    );
    let app = routes::router(state, config);

    let port = port.unwrap_or(config.api.port);
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Golf League API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
