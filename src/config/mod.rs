//! Optional `config.toml` stored in the app directory.
//!
//! Every key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_dirs;
use crate::assets::FsAssets;
use crate::dashboard::DashboardTab;

mod errors;

pub use errors::ConfigError;

/// Default filename used to store the dashboard configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// User-tunable launch settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the PNG references resolve against. `None` means the
    /// working directory.
    pub asset_root: Option<PathBuf>,
    /// Tab shown when the window opens.
    pub initial_tab: DashboardTab,
}

impl AppConfig {
    /// Asset source described by this config.
    pub fn assets(&self) -> FsAssets {
        match &self.asset_root {
            Some(root) => FsAssets::new(root),
            None => FsAssets::current_dir(),
        }
    }
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory.
///
/// On first launch the defaults are written out so the file can be edited
/// afterwards. A failed write only costs that convenience.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        match save_to_path(&config, &path) {
            Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
            Err(err) => tracing::warn!("Could not seed default config: {err}"),
        }
        return Ok(config);
    }
    tracing::info!("Loading config from {}", path.display());
    load_from_path(&path)
}

/// Load configuration from `path`, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to `path`.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
