mod api_client;
mod bot;
mod config;
mod error;
mod notifier;
mod status;

use anyhow::Result;
use config::Config;
use teloxide::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("missing required configuration: {e:#}");
            return Err(e);
        }
    };

    info!("Starting homework status bot...");

    // Create bot
    let bot = Bot::new(&config.telegram_token);

    // Start the poll loop
    bot::run(bot, config).await
}
