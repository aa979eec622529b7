//! Key/Value Storage
//!
//! Abstraction over `localStorage`-like stores plus JSON helpers.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// A synchronous string key/value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used when the browser store is unavailable and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and decode a JSON value. Returns `Ok(None)` when the key is absent.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key: key.to_string(), source }),
        None => Ok(None),
    }
}

/// Encode a value as JSON and write it under `key`.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    store.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = load_json(&store, "absent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_corrupt_value_reports_key() {
        let store = MemoryStore::new();
        store.set_item("bazarbd_cart", "{not json").unwrap();

        let err = load_json::<Vec<u32>, _>(&store, "bazarbd_cart").unwrap_err();
        match err {
            StoreError::Corrupt { key, .. } => assert_eq!(key, "bazarbd_cart"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dyn_store_roundtrip() {
        let store = MemoryStore::new();
        let dyn_store: &dyn KeyValueStore = &store;
        save_json(dyn_store, "numbers", &[1, 2, 3]).unwrap();
        assert_eq!(store.get_item("numbers").unwrap().as_deref(), Some("[1,2,3]"));
    }
}
