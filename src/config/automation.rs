//! Automation configuration and validation.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DEFAULT_CHECK_INTERVAL_MINUTES;

/// Errors that can occur while loading or validating automation settings.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Check interval must be greater than 0 minutes (got {minutes})")]
    InvalidInterval { minutes: u32 },

    #[error("Channel URL at index {index} is empty")]
    EmptyChannelUrl { index: usize },

    #[error("Channel URL at index {index} is not an http(s) URL: {url}")]
    InvalidChannelUrl { index: usize, url: String },

    #[error("Duplicate channel URL found: {url}")]
    DuplicateChannel { url: String },

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Settings of the autonomous channel finder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutonomousFinderConfig {
    /// Whether the finder runs on its schedule.
    #[serde(default)]
    pub enabled: bool,

    /// Minutes between channel checks.
    #[serde(default = "default_check_interval")]
    pub check_interval_minutes: u32,

    /// Channels watched for new videos.
    #[serde(default)]
    pub channel_urls: Vec<String>,

    /// When the finder last completed a check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_at: Option<DateTime<Utc>>,
}

fn default_check_interval() -> u32 {
    DEFAULT_CHECK_INTERVAL_MINUTES
}

impl Default for AutonomousFinderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            check_interval_minutes: default_check_interval(),
            channel_urls: Vec::new(),
            last_checked_at: None,
        }
    }
}

/// Automation settings owned by the monitoring manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationConfig {
    #[serde(default)]
    pub autonomous_finder: AutonomousFinderConfig,
}

/// Read-only summary of the automation settings at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfigSnapshot {
    pub enabled: bool,
    pub check_interval_minutes: u32,
    pub channel_count: usize,
}

impl std::fmt::Display for NotificationConfigSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "enabled={}, interval={}, channels={}",
            self.enabled, self.check_interval_minutes, self.channel_count
        )
    }
}

impl AutomationConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_json(content: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves configuration to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ValidationError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the fields reported by the configuration probe.
    #[must_use]
    pub fn snapshot(&self) -> NotificationConfigSnapshot {
        let finder = &self.autonomous_finder;
        NotificationConfigSnapshot {
            enabled: finder.enabled,
            check_interval_minutes: finder.check_interval_minutes,
            channel_count: finder.channel_urls.len(),
        }
    }

    /// Returns every problem in the finder settings, empty when valid.
    #[must_use]
    pub fn validate_all(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let minutes = self.autonomous_finder.check_interval_minutes;
        if minutes == 0 {
            errors.push(ValidationError::InvalidInterval { minutes });
        }

        let mut seen = HashSet::new();

        for (index, url) in self.autonomous_finder.channel_urls.iter().enumerate() {
            let url = url.trim();
            if url.is_empty() {
                errors.push(ValidationError::EmptyChannelUrl { index });
            } else if !(url.starts_with("https://") || url.starts_with("http://")) {
                errors.push(ValidationError::InvalidChannelUrl {
                    index,
                    url: url.to_owned(),
                });
            } else if !seen.insert(url) {
                errors.push(ValidationError::DuplicateChannel { url: url.to_owned() });
            }
        }

        errors
    }

    /// Returns the number of watched channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.autonomous_finder.channel_urls.len()
    }

    /// Creates an example configuration for users to reference.
    #[must_use]
    pub fn example() -> Self {
        Self {
            autonomous_finder: AutonomousFinderConfig {
                enabled: true,
                check_interval_minutes: 15,
                channel_urls: vec![
                    "https://www.youtube.com/@example-movies".to_owned(),
                    "https://www.youtube.com/@example-trailers".to_owned(),
                ],
                last_checked_at: None,
            },
        }
    }
}
