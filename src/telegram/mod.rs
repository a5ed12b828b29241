//! Telegram client wrapper module.
//!
//! Provides a Bot API client for sending notifications and the
//! `MessageSender` seam the interaction check is written against.

mod client;

use async_trait::async_trait;

pub use client::{SentMessage, TelegramBot, TelegramError};

use crate::config::ChatId;

/// Anything that can deliver a text message to a chat.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends `text` to `chat` in a single attempt.
    async fn send_message(&self, chat: &ChatId, text: &str) -> Result<SentMessage, TelegramError>;
}
