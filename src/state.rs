//! State Store
//!
//! Owns the item list, active filter and theme. Every mutation writes the
//! affected key back to storage exactly once before returning.

use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{FILTER_KEY, THEME_KEY, TODOS_KEY};
use crate::error::{StorageError, TodoError};
use crate::filter;
use crate::ids::{IdSource, MAX_STAMP};
use crate::models::{FilterMode, Item, ItemId, ThemeMode};
use crate::storage::{KeyValueStore, Persistence};

/// Loosely-typed persisted entry; every field is checked by hand
#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    text: Value,
    #[serde(default)]
    done: Value,
}

fn coerce_id(raw: Value) -> Option<ItemId> {
    match raw {
        Value::Number(n) => n
            .as_u64()
            .filter(|stamp| *stamp <= MAX_STAMP)
            .map(ItemId::Stamp),
        Value::String(s) => Some(ItemId::Label(s)),
        _ => None,
    }
}

/// Decode the `todos` payload.
///
/// A missing or malformed payload yields an empty list. Entries without a
/// string `text` are dropped; unusable or repeated ids are regenerated and a
/// non-boolean `done` reads as false.
pub fn decode_items(raw: Option<&str>, ids: &mut dyn IdSource) -> Vec<Item> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("[STORE] Discarding unreadable todos payload: {}", e);
            return Vec::new();
        }
    };

    let mut parsed = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();
    let mut regenerated = 0usize;
    for entry in entries {
        let Ok(RawItem { id, text, done }) = serde_json::from_value::<RawItem>(entry) else {
            continue;
        };
        let Value::String(text) = text else {
            continue;
        };
        let done = done.as_bool().unwrap_or(false);
        // The first holder of a repeated id keeps it
        let id = coerce_id(id).filter(|id| seen.insert(id.clone()));
        if let Some(id) = &id {
            ids.observe(id);
        } else {
            regenerated += 1;
        }
        parsed.push((id, text, done));
    }

    if regenerated > 0 {
        log::debug!("[STORE] Regenerating {} missing item ids", regenerated);
    }

    // Fresh ids are issued after every stored id has been observed.
    parsed
        .into_iter()
        .map(|(id, text, done)| Item {
            id: id.unwrap_or_else(|| ids.next_id()),
            text,
            done,
        })
        .collect()
}

/// Decode the `filter` value; unknown or absent means `All`
pub fn decode_filter(raw: Option<&str>) -> FilterMode {
    raw.map(FilterMode::from_str).unwrap_or_default()
}

/// Decode the `theme` value; `None` when absent or unrecognized
pub fn decode_theme(raw: Option<&str>) -> Option<ThemeMode> {
    raw.and_then(ThemeMode::parse)
}

/// In-memory list state bound to a persistent store
pub struct TodoStore {
    items: Vec<Item>,
    filter: FilterMode,
    theme: ThemeMode,
    storage: Rc<dyn KeyValueStore>,
    ids: Box<dyn IdSource>,
    /// Whether the last write reached storage
    persisted: bool,
}

impl TodoStore {
    /// Build the store from persisted values.
    ///
    /// `preferred_theme` is only consulted when no valid theme is stored.
    pub fn load(
        storage: Rc<dyn KeyValueStore>,
        mut ids: Box<dyn IdSource>,
        preferred_theme: impl FnOnce() -> ThemeMode,
    ) -> Self {
        let items = decode_items(storage.read_string(TODOS_KEY).as_deref(), ids.as_mut());
        let filter = decode_filter(storage.read_string(FILTER_KEY).as_deref());
        let theme = decode_theme(storage.read_string(THEME_KEY).as_deref())
            .unwrap_or_else(preferred_theme);

        log::info!(
            "[STORE] Loaded {} items, filter={}, theme={}",
            items.len(),
            filter.as_str(),
            theme.as_str()
        );

        Self {
            items,
            filter,
            theme,
            storage,
            ids,
            persisted: true,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Items shown under the active filter
    pub fn visible(&self) -> impl Iterator<Item = &Item> + '_ {
        filter::visible(&self.items, self.filter)
    }

    /// Append a new item with trimmed `text`
    pub fn add_item(&mut self, text: &str) -> Result<ItemId, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }
        let id = self.ids.next_id();
        self.items.push(Item::new(id.clone(), text));
        log::debug!("[STORE] Added item {}", id);
        self.save_items();
        Ok(id)
    }

    /// Flip `done` on the matching item. Returns whether one matched.
    pub fn toggle_item(&mut self, id: &ItemId) -> bool {
        let found = match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.done = !item.done;
                log::debug!("[STORE] Toggled item {} done={}", id, item.done);
                true
            }
            None => {
                log::debug!("[STORE] Toggle ignored, no item {}", id);
                false
            }
        };
        self.save_items();
        found
    }

    /// Remove the matching item. Returns whether one matched.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        if let Some(pos) = self.items.iter().position(|item| &item.id == id) {
            self.items.remove(pos);
        }
        let found = self.items.len() < before;
        log::debug!("[STORE] Remove item {} found={}", id, found);
        self.save_items();
        found
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        log::debug!("[STORE] Filter set to {}", mode.as_str());
        self.persist(FILTER_KEY, mode.as_str());
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = mode;
        log::debug!("[STORE] Theme set to {}", mode.as_str());
        self.persist(THEME_KEY, mode.as_str());
    }

    /// Flip and persist the theme, returning the new one
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    fn save_items(&mut self) {
        match serde_json::to_string(&self.items) {
            Ok(json) => self.persist(TODOS_KEY, &json),
            Err(source) => {
                let err = StorageError::Encode {
                    key: TODOS_KEY.to_string(),
                    source,
                };
                log::warn!("[STORE] {}", err);
                self.persisted = false;
            }
        }
    }

    /// Write one key, logging only when persistence starts or stops working
    fn persist(&mut self, key: &str, value: &str) {
        let saved = self.storage.write_string(key, value) == Persistence::Saved;
        if saved != self.persisted {
            if saved {
                log::info!("[STORE] Writes are reaching storage again");
            } else {
                log::warn!("[STORE] Write of {} skipped; changes are kept in memory only", key);
            }
        }
        self.persisted = saved;
    }
}
