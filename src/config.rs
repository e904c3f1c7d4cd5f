//! Application configuration, loaded from an optional TOML file.
//!
//! ```toml
//! [storage]
//! products_file = "Products.txt"
//! nutrient_tables_file = "nutrient_tables.txt"
//! atomic_writes = true
//!
//! [catalog]
//! min_article_id = 10000
//! channel_capacity = 32
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every key is optional; missing keys fall back to the values above.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "INVENTORY_CONFIG";

/// Config file picked up from the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "inventory.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Where the catalog files live and how they are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub products_file: PathBuf,
    pub nutrient_tables_file: PathBuf,
    /// Write to a sibling temporary file and rename it over the target.
    pub atomic_writes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Lowest article id handed out, and the lowest one accepted from user input.
    pub min_article_id: u32,
    /// Capacity of the catalog actor's request channel.
    pub channel_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            products_file: PathBuf::from("Products.txt"),
            nutrient_tables_file: PathBuf::from("nutrient_tables.txt"),
            atomic_writes: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            min_article_id: 10000,
            channel_capacity: 32,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Stores both catalog files under `dir`, keeping their configured names.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        let dir = dir.as_ref();
        let relocate = |file: &Path| dir.join(file.file_name().unwrap_or(file.as_os_str()));
        self.storage.products_file = relocate(&self.storage.products_file);
        self.storage.nutrient_tables_file = relocate(&self.storage.nutrient_tables_file);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.products_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "storage.products_file can't be empty".to_string(),
            ));
        }
        if self.storage.nutrient_tables_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "storage.nutrient_tables_file can't be empty".to_string(),
            ));
        }
        if self.storage.products_file == self.storage.nutrient_tables_file {
            return Err(ConfigError::Validation(
                "products and nutrient tables must be different files".to_string(),
            ));
        }
        if self.catalog.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "catalog.channel_capacity must be greater than 0".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }
        Ok(())
    }
}

/// Loads and validates the configuration.
///
/// Reads the file named by `INVENTORY_CONFIG`, else `inventory.toml` in the working directory
/// when it exists, else uses defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            info!(path = ?path, "Loading config from {CONFIG_ENV}");
            Config::load_from_file(path)?
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!(path = DEFAULT_CONFIG_FILE, "Loading config");
            Config::load_from_file(DEFAULT_CONFIG_FILE)?
        }
        None => {
            info!("No config file found, using defaults");
            Config::default()
        }
    };
    config.validate()?;
    Ok(config)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't read config file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Validation(String),
}
