//! Configuration management for the Stockroom client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with STOCKROOM_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use shared::models::{Warehouse, WarehouseDirectory};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Remote backend configuration
    pub api: ApiConfig,

    /// Session persistence configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Warehouse reference data. Injected into the product form rather
    /// than hardcoded; falls back to the deployed backend's two entries.
    #[serde(default)]
    pub warehouses: Option<Vec<Warehouse>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the inventory backend
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    /// Session file location; defaults to the user data directory
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("STOCKROOM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:3000")?
            .set_default("api.timeout_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (STOCKROOM_ prefix)
            .add_source(
                Environment::with_prefix("STOCKROOM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Resolved session file path.
    pub fn session_path(&self) -> PathBuf {
        self.session.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stockroom")
                .join("session.json")
        })
    }

    /// The warehouse directory: configured entries, or the defaults.
    pub fn warehouse_directory(&self) -> WarehouseDirectory {
        match &self.warehouses {
            Some(entries) => WarehouseDirectory::new(entries.clone()),
            None => WarehouseDirectory::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}
