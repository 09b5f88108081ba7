//! In-memory store, used by tests and ephemeral sessions

use super::Store;
use crate::error::StorageError;
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// Store that keeps everything in a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_basics() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.write("a", b"1").unwrap();
        store.write("b", b"2").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.read("a").unwrap(), Some(b"1".to_vec()));

        store.remove("a").unwrap();
        assert_eq!(store.read("a").unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
