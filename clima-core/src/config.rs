use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::fetcher::WeatherFetcher;

pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// endpoint = "http://api.openweathermap.org/data/2.5/weather"
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "clima", "clima-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replace individual settings, e.g. from command-line flags. Blank values are ignored.
    pub fn with_overrides(mut self, endpoint: Option<String>, api_key: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Build a fetcher from the configured endpoint and credential.
    pub fn fetcher(&self) -> Result<WeatherFetcher> {
        let api_key = self.api_key().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `clima configure` and enter your OpenWeatherMap API key."
            )
        })?;

        Ok(WeatherFetcher::new(self.endpoint.clone(), api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_public_endpoint_without_key() {
        let cfg = Config::default();

        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.api_key(), None);
    }

    #[test]
    fn fetcher_errors_when_missing_api_key() {
        let err = Config::default().fetcher().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `clima configure`"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = Config {
            api_key: Some("  ".into()),
            ..Config::default()
        };

        assert!(cfg.fetcher().is_err());
    }

    #[test]
    fn parses_partial_toml() {
        let cfg = Config::from_toml(r#"api_key = "KEY""#).unwrap();

        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.api_key(), Some("KEY"));
    }

    #[test]
    fn toml_roundtrip_preserves_settings() {
        let cfg = Config {
            endpoint: "http://localhost:8080/weather".into(),
            api_key: Some("KEY".into()),
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn overrides_replace_stored_values() {
        let cfg = Config::default()
            .with_overrides(Some("http://localhost/weather".into()), Some("FLAG_KEY".into()));

        assert_eq!(cfg.endpoint, "http://localhost/weather");

        let fetcher = cfg.fetcher().unwrap();
        assert_eq!(fetcher.endpoint(), "http://localhost/weather");
    }

    #[test]
    fn empty_overrides_keep_stored_values() {
        let stored = Config {
            endpoint: "http://stored/weather".into(),
            api_key: Some("STORED".into()),
        };

        let cfg = stored.clone().with_overrides(None, Some(String::new()));
        assert_eq!(cfg, stored);
    }
}
