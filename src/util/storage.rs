//! Durable key/value storage for browser-persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store goes through [`KeyValueStore`] instead of touching
//! `web-sys` directly. Hydrate builds back it with `window.localStorage`;
//! SSR renders see an always-empty store.
//!
//! TRADE-OFFS
//! ==========
//! Reads are infallible (`None` covers both "absent" and "storage
//! unreachable"), writes report a [`StorageError`] the caller may log.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Failure writing to or removing from durable storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write storage key {key}")]
    Write { key: String },
    #[error("failed to remove storage key {key}")]
    Remove { key: String },
    #[error("failed to encode value for storage key {key}: {reason}")]
    Encode { key: String, reason: String },
}

/// Synchronous string key/value store.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails, or the store's
/// write error.
pub fn save_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Encode { key: key.to_owned(), reason: e.to_string() })?;
    store.set(key, &raw)
}

/// Handle to the browser's `window.localStorage`.
///
/// Zero-sized; every call looks the storage object up again, matching how
/// the browser may revoke access between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().unwrap_or(None))
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(key).unwrap_or(None),
            Err(_) => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key: key.to_owned() })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Remove { key: key.to_owned() })
    }
}

// Server renders have no browser profile to persist into.
#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// In-process store used by tests and non-browser hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
