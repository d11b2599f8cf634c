//! Transient UI State
//!
//! Cosmetic state that never reaches local storage. Uses Leptos
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ItemId;

/// Animation and validation flags
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Input flagged after an empty submit
    pub invalid_input: bool,
    /// Rows playing their exit animation
    pub leaving: Vec<ItemId>,
    /// Rows showing their new done state ahead of the rebuild
    pub settling: Vec<ItemId>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Drop per-row animation state once the list is rebuilt
pub fn store_clear_transitions(ui: &UiStore) {
    ui.leaving().write().clear();
    ui.settling().write().clear();
}
