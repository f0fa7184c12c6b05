use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Read for parity with older deployments; nothing acts on it.
    pub admin_id: Option<i64>,
    /// Public base URL to register with `setWebhook` at startup.
    pub webhook_url: Option<Url>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    10000
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl TelegramConfig {
    /// Path the webhook route is mounted on. The token doubles as the secret.
    pub fn webhook_path(&self) -> String {
        format!("/{}", self.bot_token)
    }

    /// Full URL Telegram should push updates to, if a public base URL is set.
    pub fn webhook_endpoint(&self) -> Option<Url> {
        let mut base = self.webhook_url.clone()?;
        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        // "./" keeps a token containing ':' from being read as a URL scheme.
        match base.join(&format!("./{}", self.bot_token)) {
            Ok(endpoint) => Some(endpoint),
            Err(e) => {
                warn!("Cannot build webhook URL from WEBHOOK_URL {}: {}", base, e);
                None
            }
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = var("BOT_TOKEN").unwrap_or_else(|| {
            warn!("BOT_TOKEN is not set; replies will fail until it is provided");
            String::new()
        });

        let admin_id = var("ADMIN_ID").and_then(|raw| match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Ignoring ADMIN_ID that is not an integer: {}", raw);
                None
            }
        });

        let webhook_url = var("WEBHOOK_URL")
            .map(|raw| {
                Url::parse(&raw).with_context(|| format!("WEBHOOK_URL is not a valid URL: {raw}"))
            })
            .transpose()?;

        let port = var("PORT")
            .map(|raw| {
                raw.parse::<u16>()
                    .with_context(|| format!("PORT is not a valid port number: {raw}"))
            })
            .transpose()?
            .unwrap_or_else(default_port);

        let host = var("HOST")
            .map(|raw| {
                raw.parse::<IpAddr>()
                    .with_context(|| format!("HOST is not a valid IP address: {raw}"))
            })
            .transpose()?
            .unwrap_or_else(default_host);

        Ok(Config {
            telegram: TelegramConfig {
                bot_token,
                admin_id,
                webhook_url,
            },
            server: ServerConfig { host, port },
        })
    }
}
