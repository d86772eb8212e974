// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial selection used when the CLI is not given one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Output media type: Video, Image, Sequence or Audio
    #[serde(default = "default_media_type")]
    pub media_type: String,

    /// Codec combo label, e.g. "x264" or "HEVC NVENC"
    #[serde(default = "default_codec")]
    pub codec: String,

    /// Quality preset; blank selects the codec's first preset
    #[serde(default)]
    pub quality: String,

    /// Encoding pass; blank keeps the codec default
    #[serde(default)]
    pub pass: String,

    /// Optimize preset; blank selects the codec's first preset
    #[serde(default)]
    pub optimize: String,

    #[serde(default)]
    pub vbr: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter directive; RUST_LOG takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_media_type() -> String {
    "Video".to_string()
}

fn default_codec() -> String {
    "x264".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            media_type: default_media_type(),
            codec: default_codec(),
            quality: String::new(),
            pass: String::new(),
            optimize: String::new(),
            vbr: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("vidctl");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // Best effort: an unwritable config dir still runs on defaults
            if let Err(e) = config.save() {
                tracing::warn!(
                    error = %format!("{:#}", e),
                    "could not create default config, run 'vidctl init-config' to create one"
                );
            }

            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Create a default config file if it doesn't exist
    pub fn ensure_default() -> Result<()> {
        if !Self::exists() {
            let config = Config::default();
            config.save()?;
        }
        Ok(())
    }
}
