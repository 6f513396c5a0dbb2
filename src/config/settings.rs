//! User settings for Cashly
//!
//! Endpoints, notification socket behavior and log level.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::CashlyPaths;
use crate::error::CashlyResult;
use crate::storage::JsonFile;

/// User settings for Cashly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// WebSocket URL of the notification feed
    #[serde(default = "default_notifications_url")]
    pub notifications_url: String,

    /// Fixed delay before reconnecting the notification socket
    #[serde(default = "default_reconnect_delay_secs")]
    pub reconnect_delay_secs: u64,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_notifications_url() -> String {
    "ws://localhost:8000/ws/notifications/".to_string()
}

fn default_reconnect_delay_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            notifications_url: default_notifications_url(),
            reconnect_delay_secs: default_reconnect_delay_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Reconnect delay as a Duration
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs)
    }

    fn file(paths: &CashlyPaths) -> JsonFile {
        JsonFile::new("settings", paths.settings_file())
    }

    /// Load saved settings, or defaults when none were saved
    ///
    /// Defaults are not written back; that happens on the first `save`.
    pub fn load_or_create(paths: &CashlyPaths) -> CashlyResult<Self> {
        Ok(Self::file(paths).load()?.unwrap_or_default())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashlyPaths) -> CashlyResult<()> {
        paths.ensure_directories()?;
        Self::file(paths).save(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CashlyError;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.reconnect_delay(), Duration::from_secs(5));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.reconnect_delay_secs = 10;
        settings.notifications_url = "wss://cashly.example/ws/notifications/".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.reconnect_delay_secs, 10);
        assert_eq!(
            loaded.notifications_url,
            "wss://cashly.example/ws/notifications/"
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"log_level": "debug"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.reconnect_delay_secs, 5);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CashlyError::Storage(_)));
        assert!(err.to_string().contains("settings state"));
    }

    #[test]
    fn test_load_does_not_write_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashlyPaths::with_base_dir(temp_dir.path().to_path_buf());

        Settings::load_or_create(&paths).unwrap();
        assert!(!paths.is_initialized());
    }
}
