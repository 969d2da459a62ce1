//! In-Memory State Storage Adapter
//!
//! Keeps the document in a string map, the way browser local storage does.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::state::STORAGE_KEY;
use crate::ports::{StateStorage, StateStorageError};

/// In-memory key-value storage for the tracker document
#[derive(Debug, Clone)]
pub struct InMemoryStateStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    key: String,
}

impl InMemoryStateStorage {
    /// Create a new in-memory storage using the default key
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    /// Create a storage that reads and writes under `key`
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            key: key.into(),
        }
    }

    /// Seed a raw document, bypassing `save` (useful for tests)
    pub async fn seed(&self, document: impl Into<String>) {
        self.entries
            .write()
            .await
            .insert(self.key.clone(), document.into());
    }

    /// Get the raw stored document
    pub async fn raw(&self) -> Option<String> {
        self.entries.read().await.get(&self.key).cloned()
    }

    /// Get the number of stored entries
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for InMemoryStateStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn load(&self) -> Result<Option<String>, StateStorageError> {
        Ok(self.raw().await)
    }

    async fn save(&self, document: &str) -> Result<(), StateStorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(self.key.clone(), document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_storage_empty_loads_none() {
        let storage = InMemoryStateStorage::new();
        assert!(storage.load().await.unwrap().is_none());
        assert_eq!(storage.entry_count().await, 0);
    }

    #[tokio::test]
    async fn test_in_memory_storage_save_and_load() {
        let storage = InMemoryStateStorage::new();
        storage.save("{}").await.unwrap();

        assert_eq!(storage.load().await.unwrap().as_deref(), Some("{}"));
        assert_eq!(storage.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_in_memory_storage_uses_local_storage_key() {
        let storage = InMemoryStateStorage::new();
        storage.save("{}").await.unwrap();

        let entries = storage.entries.read().await;
        assert!(entries.contains_key("12weekYear"));
    }

    #[tokio::test]
    async fn test_in_memory_storage_clones_share_entries() {
        let storage = InMemoryStateStorage::new();
        let other = storage.clone();
        storage.seed("{\"currentWeek\":2}").await;

        assert_eq!(other.raw().await.as_deref(), Some("{\"currentWeek\":2}"));
    }
}
