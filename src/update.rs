use serde::Deserialize;
use serde_json::Value;

/// An inbound Telegram update as delivered to the webhook.
///
/// Only the fields the command dispatcher reads are modelled, and all of them
/// are optional so that partial payloads still decode. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Decode any JSON value, falling back to an empty update when the value
    /// does not have the expected shape.
    pub fn from_json(value: &Value) -> Self {
        Update::deserialize(value).unwrap_or_default()
    }

    /// Chat id and text, when the update carries both.
    pub fn text_message(&self) -> Option<(i64, &str)> {
        let message = self.message.as_ref()?;
        let chat = message.chat.as_ref()?;
        let text = message.text.as_deref()?;
        Some((chat.id, text))
    }
}
