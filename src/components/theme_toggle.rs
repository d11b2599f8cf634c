//! Theme Toggle Component
//!
//! Header button switching between light and dark.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::{Gesture, Reaction};
use crate::render::ThemeIndicator;
use crate::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let indicator = move || ctx.read(|store| ThemeIndicator::for_mode(store.theme()));

    let toggle_theme = move |_| {
        if let Some(Reaction::ThemeChanged(mode)) = ctx.handle(Gesture::ToggleTheme) {
            theme::apply_to_document(mode);
        }
    };

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="icon-btn theme-toggle"
            aria-label=move || indicator().label
            aria-pressed=move || if indicator().pressed { "true" } else { "false" }
            on:click=toggle_theme
        >
            {move || indicator().icon}
        </button>
    }
}
