//! Renderer
//!
//! Pure projection from store state to view descriptions. Components bind
//! these to the DOM and rebuild the whole list from them on every change.

use crate::models::{FilterMode, Item, ItemId, ThemeMode};
use crate::state::TodoStore;

pub const EMPTY_ALL: &str = "No todos yet — add your first one above.";
pub const EMPTY_ACTIVE: &str = "No active todos — add something above.";
pub const EMPTY_COMPLETED: &str = "No completed todos yet.";

pub fn empty_message(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => EMPTY_ALL,
        FilterMode::Active => EMPTY_ACTIVE,
        FilterMode::Completed => EMPTY_COMPLETED,
    }
}

/// One visible row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ItemId,
    pub text: String,
    pub done: bool,
    pub toggle_label: String,
    pub delete_label: String,
}

impl RowView {
    fn from_item(item: &Item) -> Self {
        let toggle_label = if item.done {
            format!("Mark {} as active", item.text)
        } else {
            format!("Mark {} as completed", item.text)
        };
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            done: item.done,
            toggle_label,
            delete_label: format!("Delete {}", item.text),
        }
    }
}

/// The list region
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty { message: &'static str },
    Rows(Vec<RowView>),
}

/// Project `visible` items, falling back to the empty-state message for `mode`
pub fn render<'a>(visible: impl IntoIterator<Item = &'a Item>, mode: FilterMode) -> ListView {
    let rows: Vec<RowView> = visible.into_iter().map(RowView::from_item).collect();
    if rows.is_empty() {
        ListView::Empty {
            message: empty_message(mode),
        }
    } else {
        ListView::Rows(rows)
    }
}

/// Project the store under its active filter
pub fn render_store(store: &TodoStore) -> ListView {
    render(store.visible(), store.filter())
}

/// One filter button
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub mode: FilterMode,
    pub label: &'static str,
    pub selected: bool,
}

pub fn filter_controls(active: FilterMode) -> Vec<FilterControl> {
    FilterMode::ALL
        .iter()
        .map(|&mode| FilterControl {
            mode,
            label: mode.label(),
            selected: mode == active,
        })
        .collect()
}

/// Theme toggle button state
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeIndicator {
    pub icon: &'static str,
    pub pressed: bool,
    pub label: &'static str,
}

impl ThemeIndicator {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                icon: "🌙",
                pressed: true,
                label: "Toggle theme",
            },
            ThemeMode::Dark => Self {
                icon: "☀️",
                pressed: false,
                label: "Toggle theme",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::storage::{KeyValueStore, MemoryStorage};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn make_item(id: u64, text: &str, done: bool) -> Item {
        Item {
            id: ItemId::Stamp(id),
            text: text.to_string(),
            done,
        }
    }

    fn row_texts(view: &ListView) -> Vec<&str> {
        match view {
            ListView::Rows(rows) => rows.iter().map(|r| r.text.as_str()).collect(),
            ListView::Empty { .. } => Vec::new(),
        }
    }

    #[test]
    fn test_empty_messages_per_mode() {
        let none: Vec<Item> = Vec::new();
        assert_eq!(
            render(&none, FilterMode::All),
            ListView::Empty { message: "No todos yet — add your first one above." }
        );
        assert_eq!(
            render(&none, FilterMode::Active),
            ListView::Empty { message: "No active todos — add something above." }
        );
        assert_eq!(
            render(&none, FilterMode::Completed),
            ListView::Empty { message: "No completed todos yet." }
        );
    }

    #[test]
    fn test_row_labels_follow_done() {
        let items = [make_item(1, "milk", false), make_item(2, "eggs", true)];
        let ListView::Rows(rows) = render(&items, FilterMode::All) else {
            panic!("expected rows");
        };

        assert_eq!(
            rows,
            vec![
                RowView {
                    id: ItemId::Stamp(1),
                    text: "milk".into(),
                    done: false,
                    toggle_label: "Mark milk as completed".into(),
                    delete_label: "Delete milk".into(),
                },
                RowView {
                    id: ItemId::Stamp(2),
                    text: "eggs".into(),
                    done: true,
                    toggle_label: "Mark eggs as active".into(),
                    delete_label: "Delete eggs".into(),
                },
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let items = [make_item(1, "a", false), make_item(2, "b", true)];
        assert_eq!(render(&items, FilterMode::All), render(&items, FilterMode::All));
    }

    #[test]
    fn test_switching_filters_shows_matching_item_only() {
        let storage = Rc::new(MemoryStorage::new());
        storage.write_string(
            crate::config::TODOS_KEY,
            r#"[{"id":1,"text":"A","done":false},{"id":2,"text":"B","done":true}]"#,
        );
        let mut store = TodoStore::load(storage, Box::new(SequentialIds::default()), || {
            ThemeMode::Dark
        });

        store.set_filter(FilterMode::Completed);
        let view = render_store(&store);
        assert_eq!(row_texts(&view), ["B"]);
        assert!(matches!(view, ListView::Rows(_)));

        store.set_filter(FilterMode::Active);
        let view = render_store(&store);
        assert_eq!(row_texts(&view), ["A"]);
        assert!(matches!(view, ListView::Rows(_)));
    }

    #[test]
    fn test_exactly_one_filter_control_selected() {
        for active in FilterMode::ALL {
            let controls = filter_controls(active);
            assert_eq!(controls.len(), 3);
            let selected: Vec<FilterMode> = controls
                .iter()
                .filter(|c| c.selected)
                .map(|c| c.mode)
                .collect();
            assert_eq!(selected, vec![active]);
        }
    }

    #[test]
    fn test_theme_indicator() {
        let light = ThemeIndicator::for_mode(ThemeMode::Light);
        assert_eq!(light.icon, "🌙");
        assert!(light.pressed);

        let dark = ThemeIndicator::for_mode(ThemeMode::Dark);
        assert_eq!(dark.icon, "☀️");
        assert!(!dark.pressed);
    }
}
