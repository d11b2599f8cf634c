//! New Todo Form Component
//!
//! Text input plus submit button for appending items.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::{Gesture, Reaction};
use crate::store::UiStateStoreFields;

/// Form for adding a todo at the end of the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(Reaction::Added(_)) = ctx.handle(Gesture::Submit(new_text.get_untracked())) {
            set_new_text.set(String::new());
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <form id="todo-form" class="todo-form" on:submit=create_item>
            <input
                id="todo-input"
                node_ref=input_ref
                type="text"
                class="todo-input"
                class:invalid=move || ctx.ui.invalid_input().get()
                placeholder="Add a new todo..."
                aria-label="New todo"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
