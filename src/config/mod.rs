//! Configuration module for the interaction check.
//!
//! Handles bot credentials from the environment, check settings,
//! and the automation configuration reported by the probe.

mod automation;
mod settings;

pub use automation::{
    AutomationConfig, AutonomousFinderConfig, NotificationConfigSnapshot, ValidationError,
};
pub use settings::{
    ADMIN_CHAT_VAR, BOT_TOKEN_VAR, ChatId, CheckSettings, ConfigError, TelegramConfig,
};

/// Check interval used when the configuration does not set one.
pub const DEFAULT_CHECK_INTERVAL_MINUTES: u32 = 60;
