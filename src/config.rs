//! Persistent settings stored as `config.toml` in the application directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{self, AppDirError};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_ENDPOINT: &str = "http://4.240.103.202:8080/upload";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to resolve config directory: {0}")]
    Dirs(#[from] AppDirError),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Absolute URL the multipart form is posted to.
    pub endpoint: String,
    /// Email of the signed-in user, when the session comes from config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_email: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads `config.toml` from the application directory, writing the defaults
/// there first if the file does not exist yet.
pub fn load_or_create() -> Result<AppConfig, ConfigError> {
    load_or_create_at(&config_path()?)
}

pub fn load_or_create_at(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.exists() {
        return load_from(path);
    }
    let config = AppConfig::default();
    save_to(&config, path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(config)
}

/// A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
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

pub fn save_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
