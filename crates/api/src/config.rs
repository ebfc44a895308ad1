//! Server configuration
//!
//! Layered: built-in defaults, then an optional TOML file, then
//! `CLIMATE_API_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "climate-api.toml";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listen address
    pub bind_addr: String,

    /// SQLite dataset file
    pub database_path: PathBuf,

    /// Pool size
    pub max_connections: u32,

    /// Debug logging
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            database_path: PathBuf::from("Resources/hawaii.sqlite"),
            max_connections: 4,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration. A missing file is not an error.
    pub fn load(file: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("bind_addr", defaults.bind_addr)?
            .set_default(
                "database_path",
                defaults.database_path.to_string_lossy().into_owned(),
            )?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("debug", defaults.debug)?
            .add_source(File::with_name(file.unwrap_or(DEFAULT_CONFIG_FILE)).required(false))
            .add_source(Environment::with_prefix("CLIMATE_API"))
            .build()?
            .try_deserialize()
    }
}
