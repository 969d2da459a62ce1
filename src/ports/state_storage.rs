//! State Storage Port - Interface for persisting the tracker document.
//!
//! The whole application state travels as one opaque JSON string; encoding
//! and merging it is the domain's concern, not the storage's.

use async_trait::async_trait;

/// Errors that can occur during state storage operations
#[derive(Debug, thiserror::Error)]
pub enum StateStorageError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading the saved document
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Load the saved document
    ///
    /// # Returns
    /// `None` when nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StateStorageError` if the backing store cannot be read
    async fn load(&self) -> Result<Option<String>, StateStorageError>;

    /// Replace the saved document
    ///
    /// # Errors
    /// Returns `StateStorageError` if save fails
    async fn save(&self, document: &str) -> Result<(), StateStorageError>;
}
