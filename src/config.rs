//! Configuration for the sync controller.
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! [sync]
//! auto_scroll = true
//! scroll_container_id = "vf-lyrics-scroll-container"
//! cue_element_prefix = "lyric-"
//! scroll_offset = 0.0
//! click_seek_respects_follow_mode = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Behavior switches for `SyncController`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// Scroll the newly active cue into view on progress-driven changes
    /// (only while follow mode is on)
    pub auto_scroll: bool,
    /// Element id of the scrollable cue container
    pub scroll_container_id: String,
    /// Prefix of cue element ids; the cue index is appended
    pub cue_element_prefix: String,
    /// Distance in pixels kept between the container top and the cue
    pub scroll_offset: f64,
    /// Whether `seek_to_index` (cue clicks by index, previous/next) is a
    /// full no-op while follow mode is off. When unset it still moves the
    /// current index; the player is never sought either way
    pub click_seek_respects_follow_mode: bool,
}

impl SyncOptions {
    /// Element id for the cue at `index`, e.g. `lyric-3`.
    pub fn cue_element_id(&self, index: usize) -> String {
        format!("{}{}", self.cue_element_prefix, index)
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            scroll_container_id: "vf-lyrics-scroll-container".to_string(),
            cue_element_prefix: "lyric-".to_string(),
            scroll_offset: 0.0,
            click_seek_respects_follow_mode: true,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sync: SyncOptions,
}

impl Config {
    /// Default config file location (`<config dir>/cuesync/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("cuesync").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if the
    /// file does not exist.
    #[cfg(not(tarpaulin_include))]
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Save to the default location.
    #[cfg(not(tarpaulin_include))]
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
