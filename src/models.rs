//! Frontend Models
//!
//! Data structures persisted to local storage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier.
///
/// Items created here carry a millisecond stamp. Payloads written by older
/// builds may carry string ids, which are kept as-is so they round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Stamp(u64),
    Label(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Stamp(stamp) => write!(f, "{}", stamp),
            ItemId::Label(label) => f.write_str(label),
        }
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub done: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Which subset of items is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Display order of the filter controls
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    /// Unknown values fall back to `All`
    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => FilterMode::Active,
            "completed" => FilterMode::Completed,
            _ => FilterMode::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Strict parse; callers decide the fallback
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_keeps_json_shape() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id":1718000000000,"text":"a","done":false},{"id":"legacy-7","text":"b","done":true}]"#,
        )
        .unwrap();

        assert_eq!(items[0].id, ItemId::Stamp(1_718_000_000_000));
        assert_eq!(items[1].id, ItemId::Label("legacy-7".to_string()));
        assert_eq!(
            serde_json::to_string(&items).unwrap(),
            r#"[{"id":1718000000000,"text":"a","done":false},{"id":"legacy-7","text":"b","done":true}]"#
        );
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::Stamp(42).to_string(), "42");
        assert_eq!(ItemId::Label("x1".into()).to_string(), "x1");
    }

    #[test]
    fn test_filter_mode_strings() {
        for mode in FilterMode::ALL {
            assert_eq!(FilterMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(FilterMode::from_str("bogus"), FilterMode::All);
        assert_eq!(FilterMode::from_str(""), FilterMode::All);
    }

    #[test]
    fn test_theme_toggle_twice_is_identity() {
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("blue"), None);
    }
}
