//! Key-value persistence seam.
//!
//! The session store only ever needs string get/set/remove, so the browser's
//! `localStorage` and an in-memory map are interchangeable behind
//! [`KeyValueStore`].

use shared_types::AppError;
use std::collections::HashMap;

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);
}

/// In-memory store used by tests and by targets without browser storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, handy for rehydration tests.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `window.localStorage`, looked up on every call so a storage area that
/// appears late (or never) is handled without caching a dead handle.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let storage =
            Self::storage().ok_or_else(|| AppError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| AppError::storage(format!("failed to write `{key}`: {e:?}")))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key, error = ?e, "failed to remove storage key");
            }
        }
    }
}

/// Storage backend for the current build target.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub type PlatformStore = BrowserStore;

/// Storage backend for the current build target.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub type PlatformStore = MemoryStore;
