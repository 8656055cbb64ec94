//! Persisted theme preference
//!
//! One key-value entry in whatever durable storage the host has
//! (browser localStorage, a config file). The stored value is the literal
//! mode string; anything else reads back as "no explicit preference".

use std::sync::{Arc, Mutex};

/// Durable storage for the explicit theme choice
pub trait PreferenceStore: Send + Sync {
    /// The raw stored value, if any
    fn load(&self) -> Option<String>;

    /// Persist an explicit choice
    fn store(&self, value: &str);

    /// Remove the stored entry entirely
    fn clear(&self);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn store(&self, value: &str) {
        (**self).store(value)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory [`PreferenceStore`] for tests and hosts without durable storage
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value already persisted
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn store(&self, value: &str) {
        *self.value.lock().unwrap() = Some(value.to_string());
    }

    fn clear(&self) {
        *self.value.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load(), None);

        store.store("dark");
        assert_eq!(store.load(), Some("dark".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
