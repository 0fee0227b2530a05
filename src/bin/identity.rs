//! Local token helper: `POST /api/tokens` returns a signed bearer token with
//! the requested claims. Meant for integration testing, never for production.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

use golf_league_api::auth::JwtKeys;
use golf_league_api::cli::{commands::serve::shutdown_signal, init_tracing};
use golf_league_api::{config, routes};

#[derive(Parser)]
#[command(name = "identity")]
#[command(about = "Mint test tokens for the Golf League API")]
struct Args {
    #[arg(long, help = "Listen port, overrides IDENTITY_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    let config = config::config();
    let keys = JwtKeys::from_config(&config.security).context("JWT_SECRET must be set")?;

    let port = args.port.unwrap_or(config.api.identity_port);
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!("Identity helper listening on http://{}", listener.local_addr()?);

    axum::serve(listener, routes::identity_router(Arc::new(keys)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
