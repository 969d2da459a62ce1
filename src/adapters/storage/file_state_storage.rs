//! File-based State Storage Adapter
//!
//! Stores the tracker document as a single JSON file inside the per-user
//! application data directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{StateStorage, StateStorageError};

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "data.json";

/// File-based storage for the tracker document
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
    file_name: String,
}

impl FileStateStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Arguments
    /// * `base_path` - The directory holding the document
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Use a different file name inside the base directory
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the document file
    pub fn file_path(&self) -> PathBuf {
        self.base_path.join(&self.file_name)
    }

    /// Ensure directory exists
    async fn ensure_dir(&self, path: &Path) -> Result<(), StateStorageError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn load(&self) -> Result<Option<String>, StateStorageError> {
        let file_path = self.file_path();

        match fs::read_to_string(&file_path).await {
            Ok(document) => {
                tracing::debug!(path = %file_path.display(), bytes = document.len(), "Loaded document");
                Ok(Some(document))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(StateStorageError::DeserializationFailed(e.to_string()))
            }
            Err(e) => Err(StateStorageError::IoError(e.to_string())),
        }
    }

    async fn save(&self, document: &str) -> Result<(), StateStorageError> {
        self.ensure_dir(&self.base_path).await?;

        let file_path = self.file_path();
        fs::write(&file_path, document)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        tracing::debug!(path = %file_path.display(), bytes = document.len(), "Saved document");
        Ok(())
    }
}
