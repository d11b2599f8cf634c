//! Filter Bar Component
//!
//! Mutually exclusive All / Active / Completed controls.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::controller::Gesture;
use crate::render::filter_controls;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="filters" role="tablist" aria-label="Filter todos">
            {move || {
                ctx.read(|store| filter_controls(store.filter()))
                    .into_iter()
                    .map(|control| {
                        let mode = control.mode;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=if control.selected { "filter-btn is-active" } else { "filter-btn" }
                                data-filter=mode.as_str()
                                aria-selected=if control.selected { "true" } else { "false" }
                                on:click=move |_| {
                                    ctx.handle(Gesture::SelectFilter(mode));
                                }
                            >
                                {control.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
