//! Telegram Bot API transport.

pub mod client;

use async_trait::async_trait;

use crate::core::models::ParseMode;
use crate::errors::SendError;

pub use client::{FORMAT_REJECTION_MARKER, TelegramClient};

/// Seam between the delivery loop and the chat endpoint, so delivery
/// semantics can be tested against a fake transport.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, text: &str, mode: ParseMode) -> Result<(), SendError>;
}
