//! Persistent client-side storage seam.
//!
//! The navbar never reaches for `localStorage` directly; it goes through
//! [`KeyValueStore`] so host-side tests can substitute [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Errors surfaced by persistent store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend rejected the operation (storage disabled,
    /// quota exceeded, detached browsing context).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String-keyed persistent store, localStorage semantics: opaque text
/// values surviving reloads, scoped to the client.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Browser `localStorage` backend.
///
/// Only hydrated client code has a real localStorage; during server
/// rendering every key reads as absent and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::prelude::*;

            #[wasm_bindgen]
            extern "C" {
                #[wasm_bindgen(js_namespace = localStorage, catch)]
                fn getItem(key: &str) -> Result<Option<String>, JsValue>;
            }

            getItem(key).map_err(|err| StoreError::Backend(format!("{err:?}")))
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::prelude::*;

            #[wasm_bindgen]
            extern "C" {
                #[wasm_bindgen(js_namespace = localStorage, catch)]
                fn setItem(key: &str, value: &str) -> Result<(), JsValue>;
            }

            setItem(key, value).map_err(|err| StoreError::Backend(format!("{err:?}")))
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::prelude::*;

            #[wasm_bindgen]
            extern "C" {
                #[wasm_bindgen(js_namespace = localStorage, catch)]
                fn removeItem(key: &str) -> Result<(), JsValue>;
            }

            removeItem(key).map_err(|err| StoreError::Backend(format!("{err:?}")))
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-memory store backed by a `HashMap`, for tests and anywhere a real
/// browser store is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("user").unwrap().is_none());

        store.set("user", r#"{"name":"Alex"}"#).unwrap();
        assert_eq!(
            store.get("user").unwrap().as_deref(),
            Some(r#"{"name":"Alex"}"#)
        );

        store.remove("user").unwrap();
        assert!(store.get("user").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn removing_an_absent_key_is_not_an_error() {
        let store = MemoryStore::new();
        assert!(store.remove("never-written").is_ok());
    }
}
