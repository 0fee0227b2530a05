use anyhow::Context;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config;
use crate::database::DatabaseManager;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let database = DatabaseManager::connect(&config::config().database)
        .await
        .context("Failed to connect to the database")?;
    database.migrate().await.context("Failed to apply migrations")?;
    database.close().await;

    match output_format {
        OutputFormat::Json => println!("{}", json!({"success": true, "message": "Migrations applied"})),
        OutputFormat::Text => println!("✓ Migrations applied"),
    }
    Ok(())
}
