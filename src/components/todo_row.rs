//! Todo Row Component
//!
//! A single item: toggle, text, delete.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::Gesture;
use crate::render::RowView;
use crate::store::UiStateStoreFields;

const CHECK_PATH: &str = "M20 7l-10 10-6-6";
const CROSS_PATH: &str = "M6 6l12 12M18 6L6 18";

/// A single row in the list
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let ui = ctx.ui;

    let RowView {
        id,
        text,
        done,
        toggle_label,
        delete_label,
    } = row;
    let data_id = id.to_string();

    let leaving = Memo::new({
        let id = id.clone();
        move |_| ui.leaving().read().contains(&id)
    });
    let settling = Memo::new({
        let id = id.clone();
        move |_| ui.settling().read().contains(&id)
    });

    // Flips right away on toggle, before the list is rebuilt
    let shown_done = move || done != settling.get();

    let row_class = move || {
        let mut c = String::from("todo-item");
        if shown_done() { c.push_str(" done"); }
        if leaving.get() { c.push_str(" leaving"); }
        c
    };

    let toggle_id = id.clone();
    let on_toggle = move |_| {
        ctx.handle(Gesture::Toggle(toggle_id.clone()));
    };
    let on_delete = move |_| {
        ctx.handle(Gesture::Delete(id.clone()));
    };

    view! {
        <li class=row_class data-id=data_id>
            <button
                type="button"
                class=move || if shown_done() { "toggle active" } else { "toggle" }
                aria-label=toggle_label
                aria-pressed=move || if shown_done() { "true" } else { "false" }
                on:click=on_toggle
            >
                <svg
                    class="icon"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                    style:opacity=move || if shown_done() { "1" } else { "0" }
                >
                    <path d=CHECK_PATH stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" fill="none" />
                </svg>
            </button>
            <span class="text">{text}</span>
            <button type="button" class="icon-btn delete" aria-label=delete_label on:click=on_delete>
                <svg class="icon" viewBox="0 0 24 24" aria-hidden="true">
                    <path d=CROSS_PATH stroke="currentColor" stroke-width="2" stroke-linecap="round" fill="none" />
                </svg>
            </button>
        </li>
    }
}
