//! Persistent key-value storage layer.
//!
//! The browser's local storage is the production backend; this crate only
//! sees it through the [`KeyValueStore`] trait. [`MemoryStore`] backs tests
//! and non-browser embeddings.

pub mod alerts;

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend refused the write (e.g. quota exhausted).
    #[error("Storage write rejected: {0}")]
    WriteRejected(String),

    #[error("Alert encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// String-keyed, string-valued storage with wholesale reads and writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k");
        assert_eq!(store.get("k"), None);
        // Removing an absent key is fine.
        store.remove("k");
    }
}
