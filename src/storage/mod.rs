//! Durable key/value storage
//!
//! Everything the engine persists goes through [`Store`] wrapped in a
//! versioned JSON [`Record`]. Reads never fail: a missing, unreadable or
//! undecodable record is reported as absent so callers regenerate defaults.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Current on-disk record version
pub const RECORD_VERSION: u32 = 1;

/// Raw byte storage keyed by `/`-separated names
pub trait Store: Send + Sync {
    /// Read the bytes stored under `key`, `Ok(None)` if there are none
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the backing medium fails.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the backing medium fails.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the backing medium fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Versioned envelope around persisted data
#[derive(Debug, Serialize, Deserialize)]
pub struct Record<T> {
    pub version: u32,
    pub data: T,
}

/// Load and decode the record stored under `key`
///
/// Any failure (I/O, malformed JSON, unknown version) is logged and treated
/// as a missing record.
pub fn load_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let bytes = match store.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            trace!(key, "no stored record");
            return None;
        }
        Err(err) => {
            warn!(key, %err, "could not read record, using defaults");
            return None;
        }
    };

    match serde_json::from_slice::<Record<T>>(&bytes) {
        Ok(record) if record.version == RECORD_VERSION => Some(record.data),
        Ok(record) => {
            warn!(key, version = record.version, "unsupported record version, using defaults");
            None
        }
        Err(err) => {
            warn!(key, %err, "corrupt record, using defaults");
            None
        }
    }
}

/// Encode `data` in the current record version and store it under `key`
///
/// # Errors
/// Returns `StorageError` if encoding or writing fails.
pub fn save_record<T: Serialize>(store: &dyn Store, key: &str, data: &T) -> Result<(), StorageError> {
    let record = Record {
        version: RECORD_VERSION,
        data,
    };
    let bytes = serde_json::to_vec_pretty(&record).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn record_round_trip() {
        let store = MemoryStore::new();
        let sample = Sample {
            name: "thank".to_string(),
            count: 3,
        };

        save_record(&store, "samples/one", &sample).unwrap();
        let loaded: Option<Sample> = load_record(&store, "samples/one");
        assert_eq!(loaded, Some(sample));
    }

    #[test]
    fn record_is_wrapped_with_version() {
        let store = MemoryStore::new();
        save_record(&store, "n", &5_u32).unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&store.read("n").unwrap().unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["data"], 5);
    }

    #[test]
    fn missing_record_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load_record::<Sample>(&store, "nothing"), None);
    }

    #[traced_test]
    #[test]
    fn corrupt_record_is_none() {
        let store = MemoryStore::new();
        store.write("bad", b"{ not json").unwrap();

        assert_eq!(load_record::<Sample>(&store, "bad"), None);
        assert!(logs_contain("corrupt record"));
    }

    #[traced_test]
    #[test]
    fn future_version_is_none() {
        let store = MemoryStore::new();
        store
            .write("future", br#"{"version":99,"data":{"name":"x","count":1}}"#)
            .unwrap();

        assert_eq!(load_record::<Sample>(&store, "future"), None);
        assert!(logs_contain("unsupported record version"));
    }

    #[test]
    fn wrong_shape_is_none() {
        let store = MemoryStore::new();
        save_record(&store, "shape", &"just a string").unwrap();
        assert_eq!(load_record::<Sample>(&store, "shape"), None);
    }
}
