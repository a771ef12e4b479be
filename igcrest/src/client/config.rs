// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! REST client configuration

use crate::error::{IgcError, IgcResult};
use crate::search::MAX_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_URL: &str = "IGC_URL";
pub const ENV_USER: &str = "IGC_USER";
pub const ENV_PASSWORD: &str = "IGC_PASSWORD";
pub const ENV_PAGE_SIZE: &str = "IGC_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "IGC_TIMEOUT_SECS";

/// Connection settings for an IGC server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the services tier, e.g. `https://igc:9443`
    pub base_url: String,

    pub user: Option<String>,

    /// Never written back out
    #[serde(skip_serializing)]
    pub password: Option<String>,

    /// Page size used when a search does not set one
    pub page_size: u32,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:9443".to_string(),
            user: None,
            password: None,
            page_size: 100,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Load from a JSON file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> IgcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            IgcError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: ClientConfig = serde_json::from_str(&text).map_err(|e| {
            IgcError::ConfigError(format!("invalid config {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded client config from {}", path.display());
        Ok(config)
    }

    /// Defaults overridden by `IGC_*` environment variables
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Override fields from `IGC_*` environment variables that are set
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_URL) {
            self.base_url = url;
        }
        if let Ok(user) = std::env::var(ENV_USER) {
            self.user = Some(user);
        }
        if let Ok(password) = std::env::var(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
            match raw.parse() {
                Ok(size) => self.page_size = size,
                Err(_) => log::warn!("Ignoring {}={}: not a number", ENV_PAGE_SIZE, raw),
            }
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            match raw.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring {}={}: not a number", ENV_TIMEOUT_SECS, raw),
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> IgcResult<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| IgcError::ConfigError(format!("invalid base url: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(IgcError::ConfigError(
                "base url must use http or https".to_string(),
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(IgcError::ConfigError(format!(
                "page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.timeout_secs == 0 {
            return Err(IgcError::ConfigError(
                "timeout must be at least one second".to_string(),
            ));
        }
        if self.password.is_some() && self.user.is_none() {
            return Err(IgcError::ConfigError(
                "password given without a user".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [ENV_URL, ENV_USER, ENV_PASSWORD, ENV_PAGE_SIZE, ENV_TIMEOUT_SECS] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_with_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://igc.example.com:9443", "user": "isadmin", "password": "secret"}}"#
        )
        .unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://igc.example.com:9443");
        assert_eq!(config.user.as_deref(), Some("isadmin"));
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_password_not_serialized() {
        let config = ClientConfig::default().with_credentials("isadmin", "secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("isadmin"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ClientConfig::from_file("/nonexistent/igc.json").unwrap_err();
        assert!(matches!(err, IgcError::ConfigError(_)));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var(ENV_URL, "https://env-host:9443");
        std::env::set_var(ENV_USER, "envuser");
        std::env::set_var(ENV_PAGE_SIZE, "250");
        std::env::set_var(ENV_TIMEOUT_SECS, "not-a-number");
        let config = ClientConfig::from_env();
        clear_env();

        assert_eq!(config.base_url, "https://env-host:9443");
        assert_eq!(config.user.as_deref(), Some("envuser"));
        assert_eq!(config.page_size, 250);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    #[serial]
    fn test_env_leaves_unset_fields() {
        clear_env();
        let config = ClientConfig::new("http://igc:9080").apply_env();
        assert_eq!(config.base_url, "http://igc:9080");
        assert!(config.user.is_none());
    }

    #[test]
    fn test_validation_failures() {
        assert!(ClientConfig::new("ftp://igc").validate().is_err());
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::default().with_page_size(0).validate().is_err());
        let mut config = ClientConfig::default();
        config.password = Some("secret".to_string());
        assert!(config.validate().is_err());
    }
}
