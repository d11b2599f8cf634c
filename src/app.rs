//! Pro Todo App
//!
//! Root component: loads persisted state and lays out the card.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTodoForm, ThemeToggle, TiltCard, TodoList};
use crate::context::AppContext;
use crate::ids::ClockIds;
use crate::state::TodoStore;
use crate::storage::open_storage;
use crate::store::UiState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::load(
        open_storage(),
        Box::new(ClockIds::default()),
        theme::preferred_theme,
    );
    theme::apply_to_document(store.theme());

    // Provide context to all children
    provide_context(AppContext::new(
        store,
        signal(0u32),
        Store::new(UiState::default()),
    ));

    view! {
        <TiltCard>
            <header class="header">
                <h1 class="title">"Todos"</h1>
                <ThemeToggle />
            </header>
            <NewTodoForm />
            <FilterBar />
            <TodoList />
        </TiltCard>
    }
}
