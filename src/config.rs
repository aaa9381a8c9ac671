//! Configuration management for tickbox
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_FADE_DURATION_MS, DEFAULT_FRAME_INTERVAL_MS,
    LOCAL_CONFIG_FILE, MAX_FADE_DURATION_MS, MAX_FRAME_INTERVAL_MS, MODAL_DEFAULT_WIDTH, MODAL_MAX_WIDTH,
    MODAL_MIN_WIDTH,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Enable mouse support (click outside the modal to dismiss it)
    pub mouse_enabled: bool,
    /// Modal width in columns
    pub modal_width: u16,
    /// Close the modal after a task is added
    pub close_on_submit: bool,
    /// Clear typed text when the modal is dismissed without submitting
    pub clear_input_on_cancel: bool,
}

/// Modal fade animation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fade duration in milliseconds (0 = no animation)
    pub fade_duration_ms: u64,
    /// Delay between frames in milliseconds
    pub frame_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the cache directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            mouse_enabled: true,
            modal_width: MODAL_DEFAULT_WIDTH,
            close_on_submit: true,
            clear_input_on_cancel: false,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl AnimationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Ok(path) = Self::get_default_config_path() {
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.modal_width < MODAL_MIN_WIDTH || self.ui.modal_width > MODAL_MAX_WIDTH {
            anyhow::bail!(
                "modal_width must be between {} and {} columns, got {}",
                MODAL_MIN_WIDTH,
                MODAL_MAX_WIDTH,
                self.ui.modal_width
            );
        }

        if self.animation.fade_duration_ms > MAX_FADE_DURATION_MS {
            anyhow::bail!("fade_duration_ms cannot exceed {}", MAX_FADE_DURATION_MS);
        }

        if self.animation.frame_interval_ms == 0 || self.animation.frame_interval_ms > MAX_FRAME_INTERVAL_MS {
            anyhow::bail!(
                "frame_interval_ms must be between 1 and {}, got {}",
                MAX_FRAME_INTERVAL_MS,
                self.animation.frame_interval_ms
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# tickbox Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
