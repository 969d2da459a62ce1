//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TWELVE_WEEK` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use twelve_week::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data lives in {:?}", config.storage.resolve_data_dir());
//! ```

mod error;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig, APP_DIR_NAME};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the saved document lives
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TWELVE_WEEK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TWELVE_WEEK__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `TWELVE_WEEK__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TWELVE_WEEK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
