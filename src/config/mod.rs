// SPDX-License-Identifier: MPL-2.0
//! Application configuration: loading and saving user preferences to a
//! `settings.toml` file under the platform config directory.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "NeaTripCarousel";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Interval between automatic slide advances, in milliseconds.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,
    /// Whether autoplay starts enabled for the hosted gallery.
    #[serde(default)]
    pub autoplay: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            autoplay_interval_ms: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
            autoplay: Some(false),
        }
    }
}

impl Config {
    /// Returns the autoplay interval clamped to the supported range.
    #[must_use]
    pub fn autoplay_interval(&self) -> std::time::Duration {
        let ms = self
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        std::time::Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
