//! Configuration loading
//!
//! Reads `~/.config/staymap/config.toml`. A missing file yields defaults; an
//! unreadable or malformed file yields defaults plus a warning for the UI.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StaymapError;

pub mod types;

pub use types::{Config, DensitySetting, StalePolicy, ViewConfig};

const CONFIG_DIR: &str = "staymap";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to surface to the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(err) => {
            log::warn!("{}", err);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", err)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, StaymapError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(|message| StaymapError::InvalidConfig {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
