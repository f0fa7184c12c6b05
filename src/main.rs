mod bot;
mod commands;
mod config;
mod platform;
mod server;
mod update;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::Dispatcher;
use crate::config::Config;
use crate::platform::telegram::TelegramClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,godseye_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Configuration loaded");
    info!("  Listen address: {}", config.server.bind_addr());
    info!("  Admin ID: {:?}", config.telegram.admin_id);
    if let Some(url) = &config.telegram.webhook_url {
        info!("  Public URL: {}", url);
    }

    let telegram = TelegramClient::new(&config.telegram.bot_token);

    if let Some(endpoint) = config.telegram.webhook_endpoint() {
        if let Err(e) = telegram.register_webhook(endpoint).await {
            warn!("{:#}", e);
        }
    }

    let dispatcher = Dispatcher::new(Arc::new(telegram));
    let app = server::router(&config.telegram.webhook_path(), dispatcher);

    server::serve(config.server.bind_addr(), app).await?;

    Ok(())
}
