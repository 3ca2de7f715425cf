//! Configuration system using TOML files.
//!
//! Config is read from the OS-standard config directory unless a path is
//! given explicitly:
//! - Windows: %APPDATA%\song-library\config.toml
//! - macOS: ~/Library/Application Support/song-library/config.toml
//! - Linux: ~/.config/song-library/config.toml
//!
//! Every key is optional. Command-line flags and their environment
//! variables (`SONG_LIBRARY_BIND`, `DATABASE_URL`, `MUSIC_INFO_URL`)
//! override values from the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Song database settings
    pub database: DatabaseConfig,

    /// Song detail lookup settings
    pub enrichment: EnrichmentConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Song database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: crate::db::db_url(None),
            max_connections: crate::db::DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Song detail lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Call the music info service; when false placeholder details are used
    pub enabled: bool,

    /// Base URL of the music info service (the `/info` endpoint lives below it)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            timeout_secs: 10,
        }
    }
}

/// Values given on the command line (or via environment) that win over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub database_url: Option<String>,
    pub music_info_url: Option<String>,
}

impl Config {
    /// Apply command-line overrides.
    ///
    /// Supplying a music info URL also switches enrichment on.
    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(bind) = &overrides.bind {
            self.server.bind = bind.clone();
        }
        if let Some(url) = &overrides.database_url {
            self.database.url = url.clone();
        }
        if let Some(url) = &overrides.music_info_url {
            self.enrichment.base_url = url.clone();
            self.enrichment.enabled = true;
        }
        self
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("song-library"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Load configuration from an explicit path
///
/// Unlike [`load`], a missing or malformed file is an error: the caller
/// asked for this file specifically.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        crate::error::Error::config(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
