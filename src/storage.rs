//! Storage Adapter
//!
//! Best-effort string key-value persistence. Reads yield `None` and writes
//! yield `Persistence::Skipped` on any failure; nothing escapes as an error.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::error::StorageError;

/// Outcome of a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Saved,
    Skipped,
}

/// String-keyed persistent store
pub trait KeyValueStore {
    fn read_string(&self, key: &str) -> Option<String>;
    fn write_string(&self, key: &str, value: &str) -> Persistence;
}

fn js_reason(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_reason(e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }

    fn try_read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_reason(e),
        })
    }

    fn try_write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(e),
        })
    }
}

impl KeyValueStore for BrowserStorage {
    fn read_string(&self, key: &str) -> Option<String> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[STORAGE] {}", e);
                None
            }
        }
    }

    fn write_string(&self, key: &str, value: &str) -> Persistence {
        match self.try_write(key, value) {
            Ok(()) => Persistence::Saved,
            Err(e) => {
                log::warn!("[STORAGE] {}", e);
                Persistence::Skipped
            }
        }
    }
}

/// In-memory store; lost on reload
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn read_string(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write_string(&self, key: &str, value: &str) -> Persistence {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Persistence::Saved
    }
}

/// Open local storage, degrading to memory-only when it cannot be used
pub fn open_storage() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("[STORAGE] {}; changes will not survive a reload", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
