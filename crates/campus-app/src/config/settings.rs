//! Settings file loading and CLI overrides

use std::path::{Path, PathBuf};

use campus_core::prelude::*;
use campus_core::{Page, Role};

use super::types::Settings;

const APP_DIR: &str = "unicode-campus";
const CONFIG_FILENAME: &str = "config.toml";

/// Default location of `config.toml` in the platform config directory
///
/// Returns `None` on platforms without a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Read and parse a config file, reporting why it failed
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", config_path, e)))?;
    toml::from_str(&content).map_err(|e| Error::config_parse(config_path, e))
}

/// Apply command-line overrides on top of file settings
pub fn apply_overrides(settings: &mut Settings, role: Option<Role>, page: Option<Page>) {
    if let Some(role) = role {
        debug!("CLI override: role = {}", role);
        settings.session.role = role;
    }
    if let Some(page) = page {
        debug!("CLI override: page = {}", page);
        settings.session.page = page;
    }
}
