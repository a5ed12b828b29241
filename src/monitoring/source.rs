//! Automation configuration sources.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{AutomationConfig, ValidationError};

/// Provides the current automation configuration on demand.
#[async_trait]
pub trait AutomationConfigSource: Send + Sync {
    /// Returns the configuration as it is at call time.
    async fn automation_config(&self) -> Result<AutomationConfig, ValidationError>;
}

/// Reads the configuration from the JSON file the monitoring manager maintains.
///
/// The file is re-read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Creates a source for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AutomationConfigSource for FileConfigSource {
    async fn automation_config(&self) -> Result<AutomationConfig, ValidationError> {
        debug!("Reading automation config from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        AutomationConfig::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_source_reads_current_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("automation.json");
        let source = FileConfigSource::new(&path);

        std::fs::write(
            &path,
            r#"{"autonomousFinder":{"enabled":false,"checkIntervalMinutes":5,"channelUrls":[]}}"#,
        )
        .unwrap();
        let first = source.automation_config().await.unwrap().snapshot();
        assert!(!first.enabled);
        assert_eq!(first.check_interval_minutes, 5);

        std::fs::write(
            &path,
            r#"{"autonomousFinder":{"enabled":true,"checkIntervalMinutes":10,"channelUrls":["x"]}}"#,
        )
        .unwrap();
        let second = source.automation_config().await.unwrap().snapshot();
        assert!(second.enabled);
        assert_eq!(second.channel_count, 1);
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileConfigSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.automation_config().await,
            Err(ValidationError::IoError(_))
        ));
    }
}
