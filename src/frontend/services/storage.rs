//! Session-scoped key-value storage.

use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("window is not available")]
    NoWindow,
    #[cfg_attr(not(all(feature = "web", target_arch = "wasm32")), allow(dead_code))]
    #[error("session storage is not available")]
    Unavailable,
    #[cfg_attr(not(all(feature = "web", target_arch = "wasm32")), allow(dead_code))]
    #[error("storage operation on '{key}' failed: {message}")]
    Operation { key: String, message: String },
    #[error("failed to serialize value for '{key}': {message}")]
    Serialize { key: String, message: String },
}

/// Where session data lives.
///
/// `Browser` talks to `window.sessionStorage` and is inert outside wasm.
/// `Memory` keeps the data for as long as the process runs, which is what
/// the desktop build and the tests use.
#[derive(Clone, Debug)]
pub enum SessionStore {
    Browser,
    Memory(Rc<RefCell<HashMap<String, String>>>),
}

impl Default for SessionStore {
    fn default() -> Self {
        if cfg!(all(feature = "web", target_arch = "wasm32")) {
            Self::Browser
        } else {
            Self::memory()
        }
    }
}

impl SessionStore {
    /// Creates an empty in-memory store.
    pub fn memory() -> Self {
        Self::Memory(Rc::default())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Memory(map) => map.borrow().get(key).cloned(),
            Self::Browser => browser::get(key),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(map) => {
                map.borrow_mut().insert(key.to_string(), value.to_string());
                Ok(())
            }
            Self::Browser => browser::set(key, value),
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(map) => {
                map.borrow_mut().remove(key);
                Ok(())
            }
            Self::Browser => browser::remove(key),
        }
    }

    /// Reads `key` and parses it as JSON.
    ///
    /// `Ok(None)` means the key is absent. A present value that fails to
    /// parse is returned as the parse error.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        self.get(key)
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set(key, &json)
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod browser {
    use super::StorageError;

    fn session_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::NoWindow)?;
        window
            .session_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }

    pub fn get(key: &str) -> Option<String> {
        let storage = session_storage().ok()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read '{key}' from session storage: {e:?}");
                None
            }
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), StorageError> {
        session_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Operation {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    pub fn remove(key: &str) -> Result<(), StorageError> {
        session_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Operation {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
mod browser {
    use super::StorageError;

    pub fn get(_key: &str) -> Option<String> {
        None
    }

    pub fn set(_key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::NoWindow)
    }

    pub fn remove(_key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = SessionStore::memory();
        assert_eq!(store.get("user"), None);

        store.set("user", "{}").unwrap();
        assert_eq!(store.get("user").as_deref(), Some("{}"));

        store.remove("user").unwrap();
        assert_eq!(store.get("user"), None);
    }

    #[test]
    fn clones_share_the_same_memory() {
        let store = SessionStore::memory();
        let other = store.clone();
        other.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn get_json_distinguishes_absent_from_malformed() {
        let store = SessionStore::memory();
        assert!(store.get_json::<Value>("user").unwrap().is_none());

        store.set("user", "{not json").unwrap();
        assert!(store.get_json::<Value>("user").is_err());

        store.set_json("user", &json!({ "name": "Budi" })).unwrap();
        let value = store.get_json::<Value>("user").unwrap().unwrap();
        assert_eq!(value["name"], "Budi");
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn browser_store_is_inert_off_wasm() {
        let store = SessionStore::Browser;
        assert_eq!(store.get("user"), None);
        assert!(store.remove("user").is_ok());
        assert_eq!(store.set("user", "{}"), Err(StorageError::NoWindow));
    }

    #[test]
    fn browser_failures_name_the_key() {
        let err = StorageError::Operation {
            key: "user".into(),
            message: "QuotaExceededError".into(),
        };
        assert_eq!(
            err.to_string(),
            "storage operation on 'user' failed: QuotaExceededError"
        );
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "session storage is not available"
        );
    }
}
