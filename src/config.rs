//! Configuration handling for the forms client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default REST backend address
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// How long a success banner stays up before the form closes
const DEFAULT_SUCCESS_DELAY_MS: u64 = 2000;

const API_BASE_ENV: &str = "CLUBFORMS_API_BASE";
const WEBHOOK_URL_ENV: &str = "CLUBFORMS_WEBHOOK_URL";

/// User configuration, stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the REST backend
    pub api_base: Option<String>,
    /// Spreadsheet webhook URL
    pub webhook_url: Option<String>,
    /// Success banner delay in milliseconds
    pub success_delay_ms: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "clubforms", "clubforms-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Defaults spelled out, as written to a fresh config file
    fn with_defaults() -> Self {
        Self {
            api_base: Some(DEFAULT_API_BASE.to_string()),
            webhook_url: None,
            success_delay_ms: Some(DEFAULT_SUCCESS_DELAY_MS),
        }
    }

    /// Load configuration from file, then apply environment overrides.
    /// A missing file is created with defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
            } else if let Err(e) = Self::with_defaults().save() {
                tracing::warn!("Could not write default config to {}: {e}", path.display());
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override file values with whatever `lookup` returns for the env keys
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_base) = lookup(API_BASE_ENV).filter(|v| !v.is_empty()) {
            self.api_base = Some(api_base);
        }
        if let Some(webhook_url) = lookup(WEBHOOK_URL_ENV).filter(|v| !v.is_empty()) {
            self.webhook_url = Some(webhook_url);
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms.unwrap_or(DEFAULT_SUCCESS_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base(), "http://localhost:8000");
        assert!(config.webhook_url().is_none());
        assert_eq!(config.success_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            api_base: Some("https://club.example".to_string()),
            webhook_url: Some("https://script.example/exec".to_string()),
            success_delay_ms: Some(500),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.api_base(), "https://club.example");
        assert_eq!(parsed.webhook_url(), Some("https://script.example/exec"));
        assert_eq!(parsed.success_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base.is_none());
        assert_eq!(parsed.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"webhook_url": "https://hook", "theme": "dark"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.webhook_url(), Some("https://hook"));
    }

    #[test]
    fn test_empty_webhook_url_counts_as_unset() {
        let config = AppConfig {
            webhook_url: Some(String::new()),
            ..Default::default()
        };
        assert!(config.webhook_url().is_none());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (API_BASE_ENV, "https://prod.example"),
            (WEBHOOK_URL_ENV, "https://hook.example"),
        ]);
        let mut config = AppConfig {
            api_base: Some("http://file.example".to_string()),
            ..Default::default()
        };
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.api_base(), "https://prod.example");
        assert_eq!(config.webhook_url(), Some("https://hook.example"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig {
            api_base: Some("http://file.example".to_string()),
            ..Default::default()
        };
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.api_base(), "http://file.example");
    }

    #[test]
    fn test_config_path_ends_in_config_json() {
        if let Some(path) = AppConfig::config_path() {
            assert_eq!(path.file_name().unwrap(), "config.json");
            assert!(path.to_string_lossy().contains("clubforms"));
        }
    }

    #[test]
    fn test_written_defaults_are_spelled_out() {
        let json = serde_json::to_value(AppConfig::with_defaults()).unwrap();
        assert_eq!(json["api_base"], "http://localhost:8000");
        assert_eq!(json["success_delay_ms"], 2000);
        assert!(json["webhook_url"].is_null());

        let reloaded: AppConfig = serde_json::from_value(json).unwrap();
        assert_eq!(reloaded.api_base(), AppConfig::default().api_base());
        assert_eq!(reloaded.success_delay(), AppConfig::default().success_delay());
    }
}
