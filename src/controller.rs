//! Input Controller
//!
//! Maps user gestures to store mutations. The mutation always happens inside
//! `dispatch`; the returned `Reaction` only tells the view what to do next.

use crate::config::{DELETE_SETTLE_MS, TOGGLE_SETTLE_MS};
use crate::models::{FilterMode, ItemId, ThemeMode};
use crate::state::TodoStore;

/// A discrete user gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Raw, untrimmed input text
    Submit(String),
    Toggle(ItemId),
    Delete(ItemId),
    SelectFilter(FilterMode),
    ToggleTheme,
}

/// What happened, as far as the view is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// Blank submission; nothing changed
    InvalidInput,
    Added(ItemId),
    Toggled(ItemId),
    Removed(ItemId),
    /// Toggle or delete aimed at an id that is gone
    Missing(ItemId),
    FilterChanged(FilterMode),
    ThemeChanged(ThemeMode),
}

/// When the list should be rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rerender {
    Now,
    After(u32),
    Skip,
}

impl Reaction {
    pub fn rerender(&self) -> Rerender {
        match self {
            Reaction::InvalidInput => Rerender::Skip,
            Reaction::Toggled(_) => Rerender::After(TOGGLE_SETTLE_MS),
            Reaction::Removed(_) => Rerender::After(DELETE_SETTLE_MS),
            Reaction::Added(_)
            | Reaction::Missing(_)
            | Reaction::FilterChanged(_)
            | Reaction::ThemeChanged(_) => Rerender::Now,
        }
    }
}

pub fn dispatch(store: &mut TodoStore, gesture: Gesture) -> Reaction {
    match gesture {
        Gesture::Submit(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return Reaction::InvalidInput;
            }
            match store.add_item(text) {
                Ok(id) => Reaction::Added(id),
                Err(e) => {
                    log::debug!("[INPUT] Submit rejected: {}", e);
                    Reaction::InvalidInput
                }
            }
        }
        Gesture::Toggle(id) => {
            if store.toggle_item(&id) {
                Reaction::Toggled(id)
            } else {
                Reaction::Missing(id)
            }
        }
        Gesture::Delete(id) => {
            if store.remove_item(&id) {
                Reaction::Removed(id)
            } else {
                Reaction::Missing(id)
            }
        }
        Gesture::SelectFilter(mode) => {
            store.set_filter(mode);
            Reaction::FilterChanged(mode)
        }
        Gesture::ToggleTheme => Reaction::ThemeChanged(store.toggle_theme()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TODOS_KEY;
    use crate::ids::SequentialIds;
    use crate::render::{render_store, ListView, EMPTY_ALL};
    use crate::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    fn setup_store() -> (Rc<MemoryStorage>, TodoStore) {
        let storage = Rc::new(MemoryStorage::new());
        let store = TodoStore::load(storage.clone(), Box::new(SequentialIds::default()), || {
            ThemeMode::Dark
        });
        (storage, store)
    }

    #[test]
    fn test_submit_trims_and_adds() {
        let (_, mut store) = setup_store();
        let reaction = dispatch(&mut store, Gesture::Submit("  buy milk  ".into()));

        assert_eq!(reaction, Reaction::Added(ItemId::Stamp(1)));
        assert_eq!(reaction.rerender(), Rerender::Now);
        assert_eq!(store.items()[0].text, "buy milk");
        assert!(!store.items()[0].done);
    }

    #[test]
    fn test_blank_submit_is_rejected_without_writing() {
        let (storage, mut store) = setup_store();
        for raw in ["", "   ", "\n\t"] {
            let reaction = dispatch(&mut store, Gesture::Submit(raw.into()));
            assert_eq!(reaction, Reaction::InvalidInput);
            assert_eq!(reaction.rerender(), Rerender::Skip);
        }
        assert!(store.items().is_empty());
        assert_eq!(storage.read_string(TODOS_KEY), None);
    }

    #[test]
    fn test_toggle_mutates_before_deferred_render() {
        let (storage, mut store) = setup_store();
        dispatch(&mut store, Gesture::Submit("a".into()));

        let reaction = dispatch(&mut store, Gesture::Toggle(ItemId::Stamp(1)));
        assert_eq!(reaction.rerender(), Rerender::After(TOGGLE_SETTLE_MS));
        // Already applied and saved, before any render runs
        assert!(store.items()[0].done);
        assert!(storage
            .read_string(TODOS_KEY)
            .unwrap()
            .contains(r#""done":true"#));
    }

    #[test]
    fn test_delete_mutates_before_deferred_render() {
        let (storage, mut store) = setup_store();
        dispatch(&mut store, Gesture::Submit("a".into()));

        let reaction = dispatch(&mut store, Gesture::Delete(ItemId::Stamp(1)));
        assert_eq!(reaction, Reaction::Removed(ItemId::Stamp(1)));
        assert_eq!(reaction.rerender(), Rerender::After(DELETE_SETTLE_MS));
        assert!(store.items().is_empty());
        assert_eq!(storage.read_string(TODOS_KEY).as_deref(), Some("[]"));
        assert_eq!(render_store(&store), ListView::Empty { message: EMPTY_ALL });
    }

    #[test]
    fn test_gesture_on_removed_row_is_silent() {
        let (_, mut store) = setup_store();
        dispatch(&mut store, Gesture::Submit("a".into()));
        dispatch(&mut store, Gesture::Delete(ItemId::Stamp(1)));

        // Second click on the row that is still animating out
        let again = dispatch(&mut store, Gesture::Delete(ItemId::Stamp(1)));
        let toggle = dispatch(&mut store, Gesture::Toggle(ItemId::Stamp(1)));
        assert_eq!(again, Reaction::Missing(ItemId::Stamp(1)));
        assert_eq!(toggle, Reaction::Missing(ItemId::Stamp(1)));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_filter_and_theme_gestures() {
        let (_, mut store) = setup_store();

        let reaction = dispatch(&mut store, Gesture::SelectFilter(FilterMode::Active));
        assert_eq!(reaction, Reaction::FilterChanged(FilterMode::Active));
        assert_eq!(store.filter(), FilterMode::Active);

        assert_eq!(
            dispatch(&mut store, Gesture::ToggleTheme),
            Reaction::ThemeChanged(ThemeMode::Light)
        );
        assert_eq!(
            dispatch(&mut store, Gesture::ToggleTheme),
            Reaction::ThemeChanged(ThemeMode::Dark)
        );
    }
}
