//! Filter Engine

use crate::models::{FilterMode, Item};

impl FilterMode {
    pub fn admits(&self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.done,
            FilterMode::Completed => item.done,
        }
    }
}

/// Items shown under `mode`, in list order
pub fn visible(items: &[Item], mode: FilterMode) -> impl Iterator<Item = &Item> + '_ {
    items.iter().filter(move |item| mode.admits(item))
}
