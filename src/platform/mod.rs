pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;
use teloxide::types::ParseMode;

/// A message to deliver to a chat
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Platform-specific chat ID
    pub chat_id: i64,
    /// Message body, already escaped for `parse_mode` if one is set
    pub text: String,
    /// Rich-text rendering mode; `None` sends plain text
    pub parse_mode: Option<ParseMode>,
}

/// Delivers replies to the chat platform.
///
/// Built once at startup and shared by every request; implementations hold
/// only static configuration.
#[async_trait]
pub trait OutboundClient: Send + Sync {
    async fn send(&self, reply: Reply) -> Result<()>;
}
