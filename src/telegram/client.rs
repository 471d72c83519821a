use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::models::ParseMode;
use crate::errors::SendError;
use crate::telegram::MessageSender;

const API_BASE_URL: &str = "https://api.telegram.org";

/// Substring of the Bot API error description that identifies a Markdown
/// parse failure, as opposed to any other Bad Request. Matched only here,
/// at the transport boundary.
pub const FORMAT_REJECTION_MARKER: &str = "can't parse entities";

/// Telegram Bot API client for `sendMessage`.
pub struct TelegramClient {
    bot_token: String,
    chat_id: String,
    base_url: String,
    client: Client,
}

impl TelegramClient {
    /// `client` is the process-wide HTTP client, so its timeout and pool
    /// settings apply here too.
    #[must_use]
    pub fn new(client: Client, bot_token: String, chat_id: String) -> Self {
        Self::with_base_url(client, bot_token, chat_id, API_BASE_URL.to_string())
    }

    /// Same client against a different endpoint, for tests.
    #[must_use]
    pub fn with_base_url(
        client: Client,
        bot_token: String,
        chat_id: String,
        base_url: String,
    ) -> Self {
        Self {
            bot_token,
            chat_id,
            base_url,
            client,
        }
    }
}

// Extracted for testability.
fn build_send_payload(chat_id: &str, text: &str, mode: ParseMode) -> Value {
    let mut payload = json!({
        "chat_id": chat_id,
        "text": text,
        "disable_web_page_preview": true,
    });

    // Rich mode is signalled by the presence of the flag; plain mode omits
    // it so the text is delivered verbatim.
    if mode == ParseMode::Markdown {
        payload["parse_mode"] = Value::String("Markdown".to_string());
    }

    payload
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Translate a non-success Bot API response into the enumerated outcome the
/// delivery loop branches on.
fn classify_failure(response: &SendMessageResponse) -> SendError {
    match response.description.as_deref() {
        Some(description) if description.contains(FORMAT_REJECTION_MARKER) => {
            SendError::FormatRejected
        }
        Some(description) => SendError::Transport(description.to_string()),
        None => SendError::Transport("unknown Bot API error".to_string()),
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send(&self, text: &str, mode: ParseMode) -> Result<(), SendError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = build_send_payload(&self.chat_id, text, mode);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let parsed: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| SendError::Transport(format!("unparsable error response: {e}")))?;
        debug_assert!(!parsed.ok);
        Err(classify_failure(&parsed))
    }
}
