//! Browser Storage
//!
//! `localStorage` behind the core key/value trait. When the browser refuses
//! access the page keeps working against an in-memory store.

use std::cell::Cell;

use bazar_core::{KeyValueStore, MemoryStore, StoreError};

pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(StoreError::Unavailable("localStorage is disabled".to_string())),
            Err(err) => Err(StoreError::Unavailable(format!("{:?}", err))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{:?}", err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }
}

thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::new();
    static WARNED: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` against `localStorage`, or the in-memory fallback.
pub fn with_storage<R>(f: impl FnOnce(&dyn KeyValueStore) -> R) -> R {
    match BrowserStorage::open() {
        Ok(storage) => f(&storage),
        Err(err) => {
            if !WARNED.with(|warned| warned.replace(true)) {
                log::warn!("{err}; state will not outlive this page");
            }
            FALLBACK.with(|fallback| f(fallback))
        }
    }
}
