//! Persisted visitor preferences.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a browser without `localStorage` (or with it
//! disabled) behaves as if nothing was ever stored and silently drops writes.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::collections::HashMap;

/// Key/value preference persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used where no browser storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

#[cfg(feature = "csr")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            crate::util::dom::log_failure("localStorage.setItem", storage.set_item(key, value));
        }
    }
}
