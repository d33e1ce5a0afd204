//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::core::money::Currency;
use crate::core::rotation::ROTATION_INTERVAL;
use crate::core::workspace::Workspace;

/// Showroom configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// User id recorded on new pre-orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Display currency for prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Hero rotation interval in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_interval_ms: Option<u64>,
}

impl Config {
    /// Load configuration from all sources, discovering the workspace from
    /// the current directory
    pub fn load() -> Self {
        Self::load_for(Workspace::discover().ok().as_ref())
    }

    /// Load configuration from all sources, merging in priority order
    pub fn load_for(workspace: Option<&Workspace>) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/showroom/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Workspace config (.showroom/config.yaml)
        if let Some(ws) = workspace {
            if let Some(local) = Self::read_file(&ws.config_path()) {
                config.merge(local);
            }
        }

        // 4. Environment variables
        if let Ok(author) = std::env::var("SHOWROOM_AUTHOR") {
            config.author = Some(author);
        }
        if let Ok(currency) = std::env::var("SHOWROOM_CURRENCY") {
            match currency.parse() {
                Ok(c) => config.currency = Some(c),
                Err(e) => warn!("ignoring SHOWROOM_CURRENCY: {}", e),
            }
        }

        config
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        let only_comments = contents
            .lines()
            .map(str::trim)
            .all(|l| l.is_empty() || l.starts_with('#'));
        if only_comments {
            return None;
        }
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), "ignoring unreadable config: {}", e);
                None
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "showroom")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.currency.is_some() {
            self.currency = other.currency;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.hero_interval_ms.is_some() {
            self.hero_interval_ms = other.hero_interval_ms;
        }
    }

    /// Get the author name, falling back to the login name
    pub fn author(&self) -> String {
        if let Some(ref author) = self.author {
            return author.clone();
        }
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    pub fn currency(&self) -> Currency {
        self.currency.unwrap_or_default()
    }

    /// Rotation interval; zero falls back to the default
    pub fn hero_interval(&self) -> Duration {
        match self.hero_interval_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => ROTATION_INTERVAL,
        }
    }
}
