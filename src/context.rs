//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::INVALID_FLASH_MS;
use crate::controller::{self, Gesture, Reaction, Rerender};
use crate::state::TodoStore;
use crate::store::{store_clear_transitions, UiStateStoreFields, UiStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list state; only touched through `handle` and `read`
    store: StoredValue<TodoStore, LocalStorage>,
    /// Bumped to rebuild the list - read
    pub render_trigger: ReadSignal<u32>,
    /// Bumped to rebuild the list - write
    set_render_trigger: WriteSignal<u32>,
    /// Cosmetic row and input state
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(
        store: TodoStore,
        render_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        ui: UiStore,
    ) -> Self {
        Self {
            store: StoredValue::new_local(store),
            render_trigger: render_trigger.0,
            set_render_trigger: render_trigger.1,
            ui,
        }
    }

    /// Read the store, subscribing the caller to re-renders
    pub fn read<T>(&self, f: impl FnOnce(&TodoStore) -> T) -> T {
        self.render_trigger.track();
        self.store.with_value(f)
    }

    /// Apply a gesture, then schedule whatever the view needs.
    ///
    /// The store is mutated and saved before this returns; only the
    /// list rebuild may be deferred.
    pub fn handle(&self, gesture: Gesture) -> Option<Reaction> {
        let reaction = self
            .store
            .try_update_value(|store| controller::dispatch(store, gesture))?;

        match &reaction {
            Reaction::InvalidInput => self.flash_invalid(),
            Reaction::Toggled(id) => self.ui.settling().write().push(id.clone()),
            Reaction::Removed(id) => self.ui.leaving().write().push(id.clone()),
            _ => {}
        }

        match reaction.rerender() {
            Rerender::Now => self.reload(),
            Rerender::After(ms) => self.reload_after(ms),
            Rerender::Skip => {}
        }
        Some(reaction)
    }

    /// Rebuild the list now
    pub fn reload(&self) {
        self.set_render_trigger.update(|v| *v += 1);
        store_clear_transitions(&self.ui);
    }

    /// Rebuild the list after `ms`; not cancellable, the latest state wins
    pub fn reload_after(&self, ms: u32) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            ctx.reload();
        });
    }

    fn flash_invalid(&self) {
        let ui = self.ui;
        *ui.invalid_input().write() = true;
        spawn_local(async move {
            TimeoutFuture::new(INVALID_FLASH_MS).await;
            *ui.invalid_input().write() = false;
        });
    }
}
