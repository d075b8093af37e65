//! Configuration settings for smartdo.
//!
//! Settings are loaded from `~/.smartdo/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TodoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Motivational quote service settings.
    pub quote: QuoteConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Task file location; `~/.smartdo/tasks.json` when unset.
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the global `colored` state.
    pub fn apply(self) {
        match self {
            Self::Auto => {},
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Motivational quote service settings.
///
/// There is no built-in API key. Without one every request falls back to a
/// local quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuoteConfig {
    /// Endpoint returning quotes as JSON.
    #[serde(default = "default_quote_url")]
    pub api_url: String,
    /// Key sent in the `X-Api-Key` header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Upper bound on the whole request, in seconds.
    #[serde(default = "default_quote_timeout")]
    pub timeout_secs: u64,
}

impl QuoteConfig {
    /// Replace the API key with `key` when it is present and non-blank.
    #[must_use]
    pub fn with_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// The API key, if a non-blank one is configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_quote_url() -> String {
    "https://api.api-ninjas.com/v1/quotes?category=motivational".to_string()
}

const fn default_quote_timeout() -> u64 {
    6
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            tasks_file: None,
        }
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            api_url: default_quote_url(),
            api_key: None,
            timeout_secs: default_quote_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(paths: &Paths) -> Result<Self, TodoError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TodoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TodoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Resolve the task file: explicit override, then config, then default path.
    #[must_use]
    pub fn tasks_file(&self, paths: &Paths, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.general.tasks_file.clone())
            .unwrap_or_else(|| paths.tasks_file.clone())
    }
}
