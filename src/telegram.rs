//! Telegram delivery for status change notifications.
//!
//! Uses teloxide `Bot` directly (send-only, no dispatcher). Delivery failures
//! are logged and swallowed so a flaky chat never stalls polling.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::{debug, error};
use url::Url;

/// Outbound text channel.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send `text` to `chat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be delivered.
    async fn send_text(&self, chat: &Recipient, text: &str) -> anyhow::Result<()>;
}

/// Messenger backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    /// Create a messenger for the bot identified by `bot_token`.
    pub fn new(bot_token: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
        }
    }

    /// Create a messenger talking to a custom Bot API server.
    pub fn with_api_url(bot_token: &str, api_url: Url) -> Self {
        Self {
            bot: Bot::new(bot_token).set_api_url(api_url),
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat: &Recipient, text: &str) -> anyhow::Result<()> {
        self.bot.send_message(chat.clone(), text).await?;
        Ok(())
    }
}

/// Resolve a `CHAT_ID` value into a Telegram recipient.
///
/// Numeric values are chat ids; anything else is treated as a channel
/// username such as `@my_channel`.
pub fn parse_recipient(chat_id: &str) -> Recipient {
    let trimmed = chat_id.trim();
    match trimmed.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(trimmed.to_owned()),
    }
}

/// Sends notifications to the single configured chat.
pub struct Notifier<M> {
    messenger: M,
    chat: Recipient,
}

impl<M: Messenger> Notifier<M> {
    /// Create a notifier delivering to `chat_id` through `messenger`.
    pub fn new(messenger: M, chat_id: &str) -> Self {
        Self {
            messenger,
            chat: parse_recipient(chat_id),
        }
    }

    /// Destination chat.
    pub fn chat(&self) -> &Recipient {
        &self.chat
    }

    /// Underlying messenger.
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Send `text` to the chat. Never fails; errors are logged.
    pub async fn notify(&self, text: &str) {
        debug!("sending message to chat");
        match self.messenger.send_text(&self.chat, text).await {
            Ok(()) => debug!("message delivered"),
            Err(e) => error!(error = %e, "message was not delivered"),
        }
    }
}
