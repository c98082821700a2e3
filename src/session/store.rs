//! Token persistence over a synchronous key-value store.
//!
//! Client-side (hydrate): `window.localStorage` via `web-sys`.
//! Server-side (SSR) and tests: [`LocalStorage`] is always empty and
//! [`MemoryStore`] stands in where a working store is needed.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach callers. A store that cannot be read looks
//! empty, and failed writes are logged, so the worst case is a signed-out UI.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure reported by a [`KeyValueStore`] write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the operation (quota, privacy mode).
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Minimal string key-value store the session persists into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// # Errors
    ///
    /// Returns [`StorageError`] when the key could not be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The raw bearer token under one fixed key.
#[derive(Debug)]
pub struct TokenStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist `token` as-is. Nothing is validated here.
    pub fn save(&self, token: &str) {
        if let Err(e) = self.store.set(&self.key, token) {
            leptos::logging::warn!("failed to persist session token: {e}");
        }
    }

    /// Stored token, or `None` when absent, empty or unreadable.
    pub fn load(&self) -> Option<String> {
        self.raw().filter(|token| !token.trim().is_empty())
    }

    /// Stored value exactly as persisted, blank or not.
    pub fn raw(&self) -> Option<String> {
        self.store.get(&self.key)
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            leptos::logging::warn!("failed to remove session token: {e}");
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
