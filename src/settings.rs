//! Persisted user settings — API host, API key, theme.
//!
//! One flat JSON object at `{config_dir}/redraft/settings.json`. Values
//! are read fresh on every invocation, so an edit takes effect on the
//! next call. Nothing is validated on save; a bad host or key only shows
//! up when the next request fails.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::llm::ApiConfig;

/// Env vars that override the stored host/key for a single run.
pub const ENV_API_HOST: &str = "REDRAFT_API_HOST";
pub const ENV_API_KEY: &str = "REDRAFT_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub api_host: String,
    pub api_key: String,
    pub theme: Theme,
}

/// Display preference for front-ends. Stored and round-tripped, never
/// interpreted by the CLI itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => anyhow::bail!("unknown theme '{}' (expected light, dark, or system)", other),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

fn settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("redraft")
}

/// Full path to the settings file.
pub fn settings_path() -> PathBuf {
    settings_dir().join("settings.json")
}

impl Settings {
    /// Load from the default path. A missing or unreadable file means
    /// default settings — absence of a value is a normal state.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to the default path, creating the directory if needed.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&settings_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("[SETTINGS] Saved {}", path.display());
        Ok(())
    }

    /// Flat key-value read using the stored key names.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "apiHost" => Some(self.api_host.clone()),
            "apiKey" => Some(self.api_key.clone()),
            "theme" => Some(self.theme.to_string()),
            _ => None,
        }
    }

    /// Flat key-value write. Host and key accept any string; theme must
    /// be one of the known variants.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "apiHost" => self.api_host = value.to_string(),
            "apiKey" => self.api_key = value.to_string(),
            "theme" => self.theme = value.parse()?,
            _ => anyhow::bail!(
                "unknown setting '{}' (expected apiHost, apiKey, or theme)",
                key
            ),
        }
        Ok(())
    }

    /// Resolve the endpoint config for one request. Environment
    /// overrides win over stored values.
    pub fn resolve_api_config(&self) -> ApiConfig {
        let host = match non_empty_env(ENV_API_HOST) {
            Some(host) => {
                log::info!("[SETTINGS] Using API host from {}", ENV_API_HOST);
                host
            }
            None => self.api_host.clone(),
        };
        let key = match non_empty_env(ENV_API_KEY) {
            Some(key) => {
                log::info!("[SETTINGS] Using API key from {}", ENV_API_KEY);
                key
            }
            None => self.api_key.clone(),
        };
        ApiConfig { host, key }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
