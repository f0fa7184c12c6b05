use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::commands::Command;
use crate::platform::OutboundClient;
use crate::update::Update;

/// Routes inbound updates to canned command replies.
#[derive(Clone)]
pub struct Dispatcher {
    outbound: Arc<dyn OutboundClient>,
}

impl Dispatcher {
    pub fn new(outbound: Arc<dyn OutboundClient>) -> Self {
        Self { outbound }
    }

    /// Match the update against the known commands and start the reply.
    ///
    /// The send runs on its own task and is never awaited here; its outcome
    /// only reaches the log. Returns the task handle when a send was started.
    pub fn process_update(&self, update: &Update) -> Option<JoinHandle<()>> {
        let (chat_id, text) = match update.text_message() {
            Some(message) => message,
            None => {
                debug!("Ignoring update {:?} without chat or text", update.update_id);
                return None;
            }
        };

        let command = match Command::parse(text) {
            Some(command) => command,
            None => {
                debug!("No command in message for chat {}", chat_id);
                return None;
            }
        };

        info!("Command {:?} from chat {}", command, chat_id);

        let reply = command.reply(chat_id);
        let outbound = Arc::clone(&self.outbound);
        Some(tokio::spawn(async move {
            if let Err(e) = outbound.send(reply).await {
                warn!("Reply to chat {} was not delivered: {:#}", chat_id, e);
            }
        }))
    }
}
