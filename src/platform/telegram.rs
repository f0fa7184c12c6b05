use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use teloxide::prelude::*;
use tracing::{debug, info};

use crate::platform::{OutboundClient, Reply};

/// Telegram Bot API client backed by teloxide
#[derive(Clone)]
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot_token: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
        }
    }

    /// Point Telegram's update delivery at `endpoint`.
    pub async fn register_webhook(&self, endpoint: Url) -> Result<()> {
        self.bot
            .set_webhook(endpoint)
            .await
            .context("Failed to register webhook with Telegram")?;
        info!("Webhook registered with Telegram");
        Ok(())
    }
}

#[async_trait]
impl OutboundClient for TelegramClient {
    async fn send(&self, reply: Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(reply.chat_id), reply.text);
        if let Some(mode) = reply.parse_mode {
            request = request.parse_mode(mode);
        }

        let sent = request
            .await
            .with_context(|| format!("Failed to send message to chat {}", reply.chat_id))?;

        debug!("Delivered message {} to chat {}", sent.id.0, reply.chat_id);
        Ok(())
    }
}
