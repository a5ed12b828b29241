//! Telegram Bot API client for outbound notifications.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::MessageSender;
use crate::config::{ChatId, TelegramConfig};

/// Errors that can occur during Telegram operations.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram API rejected the request ({code}): {description}")]
    Api { code: i32, description: String },

    #[error("Flood wait required: {0} seconds")]
    FloodWait(u32),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unexpected API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL embeds the bot token.
        Self::Connection(err.without_url().to_string())
    }
}

/// Envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i32>,
    parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
struct ResponseParameters {
    retry_after: Option<u32>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, TelegramError> {
        if self.ok {
            return self
                .result
                .ok_or_else(|| TelegramError::InvalidResponse("missing result".to_owned()));
        }

        let description = self
            .description
            .unwrap_or_else(|| "no description".to_owned());

        let retry_after = self.parameters.and_then(|p| p.retry_after);

        match (self.error_code, retry_after) {
            (Some(429), Some(seconds)) => Err(TelegramError::FloodWait(seconds)),
            (code, _) => Err(TelegramError::Api {
                code: code.unwrap_or_default(),
                description,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a ChatId,
    text: &'a str,
}

/// A message accepted by Telegram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SentMessage {
    /// Identifier of the message inside its chat.
    pub message_id: i64,
}

/// HTTP client bound to one bot token.
///
/// Only issues outbound calls; updates are never polled.
pub struct TelegramBot {
    /// Underlying HTTP client.
    http: reqwest::Client,

    /// Bot API base URL without a trailing slash.
    api_base_url: String,

    /// Bot token, kept out of logs.
    token: String,
}

impl TelegramBot {
    /// Creates a bot client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &TelegramConfig, api_base_url: &str) -> Result<Self, TelegramError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Telegram client ready (api: {})", api_base_url);

        Ok(Self {
            http,
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            token: config.bot_token.clone(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base_url, self.token, method)
    }
}

#[async_trait]
impl MessageSender for TelegramBot {
    async fn send_message(&self, chat: &ChatId, text: &str) -> Result<SentMessage, TelegramError> {
        info!("Sending message to {}: \"{}\"", chat, truncate_for_log(text, 30));

        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest {
                chat_id: chat,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: ApiResponse<SentMessage> = serde_json::from_str(&body)
            .map_err(|e| TelegramError::InvalidResponse(format!("HTTP {status}: {e}")))?;

        match parsed.into_result() {
            Ok(sent) => {
                debug!("Message accepted, id: {}", sent.message_id);
                Ok(sent)
            }
            Err(err) => {
                if let TelegramError::FloodWait(seconds) = &err {
                    warn!("Flood wait triggered: {} seconds", seconds);
                }
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot")
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

/// Truncates a string for logging purposes, keeping only its first line.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or_default();
    let is_multiline = first_line.len() < s.len();
    if first_line.chars().count() <= max_len && !is_multiline {
        s.to_owned()
    } else {
        format!("{}...", first_line.chars().take(max_len).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("Hello", 10), "Hello");
        assert_eq!(truncate_for_log("Hello, World!", 5), "Hello...");
        assert_eq!(truncate_for_log("Done!\n\nMore text", 30), "Done!...");
    }

    #[test]
    fn test_non_ascii_description_is_kept_verbatim() {
        let parsed: ApiResponse<SentMessage> = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"İİİ retry after 5"}"#,
        )
        .unwrap();
        match parsed.into_result() {
            Err(TelegramError::Api { code, description }) => {
                assert_eq!(code, 400);
                assert_eq!(description, "İİİ retry after 5");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_too_many_requests_without_parameters_is_api_error() {
        let parsed: ApiResponse<SentMessage> = serde_json::from_str(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3"}"#,
        )
        .unwrap();
        assert!(matches!(
            parsed.into_result(),
            Err(TelegramError::Api { code: 429, .. })
        ));
    }

    #[test]
    fn test_ok_response_yields_result() {
        let parsed: ApiResponse<SentMessage> =
            serde_json::from_str(r#"{"ok":true,"result":{"message_id":17,"chat":{"id":1}}}"#)
                .unwrap();
        assert_eq!(parsed.into_result().unwrap(), SentMessage { message_id: 17 });
    }

    #[test]
    fn test_rejected_response_yields_api_error() {
        let parsed: ApiResponse<SentMessage> = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();
        match parsed.into_result() {
            Err(TelegramError::Api { code, description }) => {
                assert_eq!(code, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_too_many_requests_yields_flood_wait() {
        let parsed: ApiResponse<SentMessage> = serde_json::from_str(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 12","parameters":{"retry_after":12}}"#,
        )
        .unwrap();
        assert!(matches!(
            parsed.into_result(),
            Err(TelegramError::FloodWait(12))
        ));
    }

    #[test]
    fn test_ok_without_result_is_invalid() {
        let parsed: ApiResponse<SentMessage> = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(matches!(
            parsed.into_result(),
            Err(TelegramError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = TelegramConfig::new("123:secret".to_owned(), ChatId::Id(1));
        let bot = TelegramBot::new(&config, "https://api.telegram.org/").unwrap();
        let rendered = format!("{bot:?}");
        assert!(!rendered.contains("secret"));
        assert_eq!(
            bot.method_url("sendMessage"),
            "https://api.telegram.org/bot123:secret/sendMessage"
        );
    }
}
