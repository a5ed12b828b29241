//! Interaction check runner.
//!
//! The check is one forward pass:
//! 1. Send the notification to the admin chat
//! 2. Read the automation configuration and report its summary
//!
//! Both steps share one error path. A failed send returns immediately,
//! so the configuration is never read after a rejected notification.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::TEST_MESSAGE;
use crate::config::{ChatId, NotificationConfigSnapshot, ValidationError};
use crate::monitoring::AutomationConfigSource;
use crate::telegram::{MessageSender, TelegramError};

/// Errors raised while the check is running.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to send test message: {0}")]
    Dispatch(#[from] TelegramError),

    #[error("Failed to read automation config: {0}")]
    Probe(#[from] ValidationError),
}

/// Sends the check notification and probes the automation configuration.
pub struct InteractionCheck {
    /// Client used for the notification.
    sender: Arc<dyn MessageSender>,

    /// Accessor for the automation configuration.
    source: Arc<dyn AutomationConfigSource>,

    /// Recipient of the notification.
    admin_chat: ChatId,
}

impl InteractionCheck {
    /// Creates a check that sends the standard test message.
    #[must_use]
    pub fn new(
        sender: Arc<dyn MessageSender>,
        source: Arc<dyn AutomationConfigSource>,
        admin_chat: ChatId,
    ) -> Self {
        Self {
            sender,
            source,
            admin_chat,
        }
    }

    /// Runs the check and returns the reported configuration summary.
    ///
    /// # Errors
    ///
    /// Returns the first failure of either step.
    pub async fn run(&self) -> Result<NotificationConfigSnapshot, CheckError> {
        info!("🤖 Testing bot interaction...");
        self.dispatch().await?;

        info!("📋 Testing automation menu...");
        let snapshot = self.probe().await?;

        Ok(snapshot)
    }

    async fn dispatch(&self) -> Result<(), CheckError> {
        let sent = self
            .sender
            .send_message(&self.admin_chat, TEST_MESSAGE)
            .await?;

        debug!("Test message id: {}", sent.message_id);
        info!("✅ Test message sent successfully!");
        Ok(())
    }

    async fn probe(&self) -> Result<NotificationConfigSnapshot, CheckError> {
        let config = self.source.automation_config().await?;
        let snapshot = config.snapshot();

        for problem in config.validate_all() {
            debug!("Automation config problem: {}", problem);
        }

        info!("⚙️ Automation config: {}", snapshot);
        Ok(snapshot)
    }
}

impl std::fmt::Debug for InteractionCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionCheck")
            .field("admin_chat", &self.admin_chat)
            .finish_non_exhaustive()
    }
}
