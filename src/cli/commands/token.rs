use anyhow::Context;
use serde_json::json;

use crate::auth::{JwtKeys, TokenRequest};
use crate::cli::OutputFormat;
use crate::config;

pub fn handle(request: TokenRequest, output_format: OutputFormat) -> anyhow::Result<()> {
    let keys = JwtKeys::from_config(&config::config().security).context("JWT_SECRET must be set")?;
    let token = keys.issue(&request)?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "admin": request.is_admin,
                "trusted_member": request.is_trusted,
            }))?
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
