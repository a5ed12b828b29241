//! Bot credentials and check settings.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Environment variable holding the bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the admin chat identifier.
pub const ADMIN_CHAT_VAR: &str = "ADMIN_TELEGRAM_USER_ID";

/// Recipient of a bot message.
///
/// Numeric ids are sent as JSON numbers; anything else (e.g. `@channel`)
/// is passed through as a string and left for Telegram to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric user, group or channel id.
    Id(i64),
    /// Public username or other string target.
    Username(String),
}

impl From<&str> for ChatId {
    fn from(value: &str) -> Self {
        let value = value.trim();
        value
            .parse()
            .map_or_else(|_| Self::Username(value.to_owned()), Self::Id)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// Telegram bot credentials.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token issued by `@BotFather`.
    pub bot_token: String,

    /// Chat that receives the check notification.
    pub admin_chat: ChatId,
}

impl TelegramConfig {
    /// Creates a new Telegram configuration.
    #[must_use]
    pub fn new(bot_token: String, admin_chat: ChatId) -> Self {
        Self {
            bot_token,
            admin_chat,
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Expects `TELEGRAM_BOT_TOKEN` and `ADMIN_TELEGRAM_USER_ID` to be set
    /// and non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup.
    ///
    /// Whitespace-only values are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = required(&lookup, BOT_TOKEN_VAR)?;
        let admin_chat = required(&lookup, ADMIN_CHAT_VAR)?;

        Ok(Self {
            bot_token,
            admin_chat: ChatId::from(admin_chat.as_str()),
        })
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("admin_chat", &self.admin_chat)
            .finish()
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingEnvVar(key))
}

/// Settings for a single check run.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Base URL of the Bot API.
    pub api_base_url: String,

    /// Path to the automation configuration file.
    pub automation_config_path: PathBuf,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.telegram.org".to_owned(),
            automation_config_path: PathBuf::from("automation.json"),
        }
    }
}

impl CheckSettings {
    /// Creates check settings from environment variables with defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        let mut settings = Self::default();

        if let Some(url) = std::env::var("TELEGRAM_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
        {
            settings.api_base_url = url;
        }

        if let Ok(path) = std::env::var("AUTOMATION_CONFIG_PATH") {
            settings.automation_config_path = PathBuf::from(path);
        }

        settings
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
}
