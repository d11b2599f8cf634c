//! Todo List Component
//!
//! Rebuilt from scratch whenever the render trigger fires.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::render::{render_store, ListView};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    move || match ctx.read(render_store) {
        ListView::Empty { message } => view! {
            <p id="empty" class="empty" role="status">{message}</p>
        }
        .into_any(),
        ListView::Rows(rows) => view! {
            <ul id="todo-list" class="todo-list">
                {rows.into_iter().map(|row| view! { <TodoRow row=row /> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
