//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Directory name created under the per-user data directory
pub const APP_DIR_NAME: &str = "twelve-week-year";

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which adapter holds the document
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory override; defaults to the per-user data directory
    pub data_dir: Option<PathBuf>,

    /// Document file name inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    /// Resolve the directory holding the document
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoDataDir` when no override is set and the
    /// platform has no per-user data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ValidationError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|base| base.join(APP_DIR_NAME))
                .ok_or(ValidationError::NoDataDir),
        }
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.file_name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRequired("storage.file_name"));
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(ValidationError::InvalidFileName(self.file_name.clone()));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            file_name: default_file_name(),
        }
    }
}

fn default_file_name() -> String {
    "data.json".to_string()
}
