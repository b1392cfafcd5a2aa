mod cli;
mod commands;
mod main_lib;
mod render;

use clap::Parser;
use cli::Cli;
use fintrack_api_client::ApiConfig;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = ApiConfig::from_env()?;
    let state = build_state(&config)?;
    tracing::debug!("Using API at {}", config.base_url);

    commands::run(&state, cli).await
}
