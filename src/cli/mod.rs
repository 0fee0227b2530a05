pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "golf-league-api")]
#[command(about = "Golf League API - golfers, tournaments, participation and membership")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP API (default)")]
    Serve {
        #[arg(long, help = "Listen port, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Apply database migrations and exit")]
    Migrate,

    #[command(about = "Print a bearer token signed with the configured key")]
    Token {
        #[arg(long, help = "Grant the admin claim")]
        admin: bool,
        #[arg(long, help = "Grant the trusted_member claim")]
        trusted: bool,
        #[arg(long, help = "Subject claim (random when omitted)")]
        user_id: Option<String>,
        #[arg(long, help = "Email claim")]
        email: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// `RUST_LOG` wins; otherwise info for this crate and request spans
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("golf_league_api=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(port).await,
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::Token {
            admin,
            trusted,
            user_id,
            email,
        } => {
            let request = crate::auth::TokenRequest {
                is_admin: admin,
                is_trusted: trusted,
                user_id,
                email,
            };
            commands::token::handle(request, output_format)
        }
    }
}
