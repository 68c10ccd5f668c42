//! Server configuration file and environment handling.
//!
//! Configuration is read from `gsc.toml` (see [`AppConfig::from_default_location`])
//! and then overridden by environment variables:
//!
//! - `HOST`, `PORT`: listen address
//! - `GSC_CATALOGUE_PATH`: path of the `stars.json` dataset
//! - `GSC_PREFS_DIR`: directory of the preference files
//! - `GSC_STORAGE`: `memory` | `file`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::factory::RepositoryType;

pub const CONFIG_FILE_NAME: &str = "gsc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalogue: CatalogueSettings,
    #[serde(default)]
    pub preferences: PreferenceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueSettings {
    #[serde(default = "default_catalogue_path")]
    pub path: PathBuf,
    #[serde(default = "default_catalogue_name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSettings {
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default = "default_prefs_dir")]
    pub dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_catalogue_path() -> PathBuf {
    PathBuf::from("data/stars.json")
}

fn default_catalogue_name() -> String {
    super::repositories::local::DEFAULT_CATALOGUE_NAME.to_string()
}

fn default_storage() -> String {
    "file".to_string()
}

fn default_prefs_dir() -> PathBuf {
    PathBuf::from(".gsc")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            path: default_catalogue_path(),
            name: default_catalogue_name(),
        }
    }
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            dir: default_prefs_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Search for `gsc.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// File configuration (or defaults) with environment overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?.unwrap_or_default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("{}", e),
            })?;
        }
        if let Ok(path) = env::var("GSC_CATALOGUE_PATH") {
            self.catalogue.path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("GSC_PREFS_DIR") {
            self.preferences.dir = PathBuf::from(dir);
        }
        if let Ok(storage) = env::var("GSC_STORAGE") {
            self.preferences.storage = storage;
        }
        // Reject an unknown storage kind up front rather than at first save.
        self.storage_type()?;
        Ok(())
    }

    pub fn storage_type(&self) -> Result<RepositoryType, ConfigError> {
        self.preferences
            .storage
            .parse()
            .map_err(|message| ConfigError::InvalidValue {
                key: "preferences.storage".to_string(),
                message,
            })
    }

    /// `host:port` for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
